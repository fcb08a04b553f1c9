//! Longest-matching-block sequence alignment.
//!
//! Aligns two sequences by repeatedly finding the longest contiguous matching
//! run and recursing on the unmatched remainders on either side. The result
//! is a list of opcodes that partitions both sequences completely and in
//! order. [`grouped_opcodes`] additionally collapses long unchanged runs so
//! that renderers can show a limited context window around each change.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// How a span of the before-sequence maps onto a span of the after-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// Both spans contain the same elements.
    Equal,
    /// The before-span was removed; the after-span is empty.
    Delete,
    /// The after-span was added; the before-span is empty.
    Insert,
    /// Both spans are non-empty and differ.
    Replace,
}

/// A tagged pair of spans, one per sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub before: Range<usize>,
    pub after: Range<usize>,
}

/// A contiguous matching run: `a[a..a+len] == b[b..b+len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    len: usize,
}

/// Find the longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`,
/// which keeps the whole alignment deterministic.
fn longest_match<T: Eq + Hash>(
    a: &[T],
    b2j: &HashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        len: 0,
    };
    // j2len[j] = length of the longest match ending at a[i], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, item) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_j2len = HashMap::new();
        if let Some(positions) = b2j.get(item) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j == 0 {
                    1
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_j2len.insert(j, k);
                if k > best.len {
                    best = Block {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        len: k,
                    };
                }
            }
        }
        j2len = next_j2len;
    }
    best
}

/// All matching blocks between `a` and `b`, in order, adjacent blocks merged,
/// terminated by a zero-length sentinel block at the end of both sequences.
fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Block> {
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        b2j.entry(item).or_default().push(j);
    }

    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut raw = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        if block.a + block.len < ahi && block.b + block.len < bhi {
            pending.push((block.a + block.len, ahi, block.b + block.len, bhi));
        }
        raw.push(block);
    }
    raw.sort_by_key(|block| (block.a, block.b));

    let mut blocks: Vec<Block> = Vec::new();
    for block in raw {
        if let Some(last) = blocks.last_mut() {
            if last.a + last.len == block.a && last.b + last.len == block.b {
                last.len += block.len;
                continue;
            }
        }
        blocks.push(block);
    }
    blocks.push(Block {
        a: a.len(),
        b: b.len(),
        len: 0,
    });
    blocks
}

/// Compute the opcodes describing how to turn `a` into `b`.
///
/// The opcode spans partition both sequences exactly: concatenating the
/// before-spans reproduces `0..a.len()` and the after-spans `0..b.len()`.
/// Identical inputs produce a single `Equal` opcode; two empty inputs
/// produce no opcodes at all.
pub fn opcodes<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    for block in matching_blocks(a, b) {
        let tag = match (i < block.a, j < block.b) {
            (true, true) => Some(OpTag::Replace),
            (true, false) => Some(OpTag::Delete),
            (false, true) => Some(OpTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            out.push(Opcode {
                tag,
                before: i..block.a,
                after: j..block.b,
            });
        }
        if block.len > 0 {
            out.push(Opcode {
                tag: OpTag::Equal,
                before: block.a..block.a + block.len,
                after: block.b..block.b + block.len,
            });
        }
        i = block.a + block.len;
        j = block.b + block.len;
    }
    out
}

/// Group opcodes into change regions with up to `context` unchanged lines of
/// surrounding context.
///
/// Leading and trailing equal runs are trimmed to `context` lines, and equal
/// runs longer than `2 * context` lines in the interior split the opcodes
/// into separate groups. Identical inputs yield no groups.
pub fn grouped_opcodes<T: Eq + Hash>(a: &[T], b: &[T], context: usize) -> Vec<Vec<Opcode>> {
    let mut codes = opcodes(a, b);
    if codes.is_empty() {
        return Vec::new();
    }

    if let Some(first) = codes.first_mut() {
        if first.tag == OpTag::Equal {
            first.before.start = first
                .before
                .end
                .saturating_sub(context)
                .max(first.before.start);
            first.after.start = first
                .after
                .end
                .saturating_sub(context)
                .max(first.after.start);
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == OpTag::Equal {
            last.before.end = last.before.end.min(last.before.start + context);
            last.after.end = last.after.end.min(last.after.start + context);
        }
    }

    let mut groups = Vec::new();
    let mut group: Vec<Opcode> = Vec::new();
    for code in codes {
        if code.tag == OpTag::Equal && code.before.len() > 2 * context {
            // End the current group with leading context, start the next
            // with trailing context.
            group.push(Opcode {
                tag: OpTag::Equal,
                before: code.before.start..(code.before.start + context).min(code.before.end),
                after: code.after.start..(code.after.start + context).min(code.after.end),
            });
            groups.push(std::mem::take(&mut group));
            group.push(Opcode {
                tag: OpTag::Equal,
                before: code.before.end.saturating_sub(context).max(code.before.start)
                    ..code.before.end,
                after: code.after.end.saturating_sub(context).max(code.after.start)
                    ..code.after.end,
            });
            continue;
        }
        group.push(code);
    }
    let collapsed = group.len() == 1 && group[0].tag == OpTag::Equal;
    if !group.is_empty() && !collapsed {
        groups.push(group);
    }
    groups
}
