//! Comparison sorts.
//!
//! Every kernel here only needs a total order on [`SortEntry::key`]. In-place kernels
//! take `&mut [SortEntry]`; the ones that rebuild the sequence (hybrid merge, tree
//! sort) take and return a `Vec<SortEntry>`.
//!
//! All kernels accept empty and single-element input and never drop entries with
//! duplicate keys.

use crate::core::{SortEntry, apply_permutation};
use std::cmp::Ordering;

/// Hybrid merge/insertion sort ("TimSort-style").
///
/// Splits the input into runs of `min_run` entries (the last run may be shorter),
/// insertion-sorts each run, then merges neighbouring runs pairwise until one is left.
/// Stable.
pub fn tim_sort(entries: Vec<SortEntry>, min_run: usize) -> Vec<SortEntry> {
    let len = entries.len();
    if len <= 1 {
        return entries;
    }

    let min_run = min_run.max(1);
    let mut runs: Vec<Vec<SortEntry>> = Vec::with_capacity(len.div_ceil(min_run));
    let mut input = entries.into_iter().peekable();
    while input.peek().is_some() {
        let mut run: Vec<SortEntry> = input.by_ref().take(min_run).collect();
        insertion_sort(&mut run);
        runs.push(run);
    }

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pairs = runs.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => merged.push(merge(left, right)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }

    runs.pop().unwrap_or_default()
}

/// Stable linear insertion sort used for the runs of [`tim_sort`].
fn insertion_sort(run: &mut [SortEntry]) {
    for i in 1..run.len() {
        let mut j = i;
        while j > 0 && run[j - 1].key > run[j].key {
            run.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merges two sorted runs; on ties the left run wins.
fn merge(left: Vec<SortEntry>, right: Vec<SortEntry>) -> Vec<SortEntry> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.key < l.key,
            _ => break,
        };
        if take_right {
            out.extend(right.next());
        } else {
            out.extend(left.next());
        }
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Comb sort.
///
/// The gap starts at the input length and is divided by `shrink` (truncating) before
/// every pass, never going below 1. Sorting stops after a gap-1 pass without swaps.
pub fn comb_sort(entries: &mut [SortEntry], shrink: f64) {
    let len = entries.len();
    let mut gap = len;
    let mut sorted = false;

    while !sorted {
        gap = (gap as f64 / shrink) as usize;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }

        for i in 0..len.saturating_sub(gap) {
            if entries[i].key > entries[i + gap].key {
                entries.swap(i, i + gap);
                sorted = false;
            }
        }
    }
}

/// Selection sort: moves the first minimum of the unscanned suffix to its front.
pub fn selection_sort(entries: &mut [SortEntry]) {
    let len = entries.len();
    for i in 0..len {
        let min = (i + 1..len).fold(i, |min, j| {
            if entries[j].key < entries[min].key {
                j
            } else {
                min
            }
        });
        entries.swap(i, min);
    }
}

/// Bubble sort. Stable; stops early after a pass without exchanges.
pub fn bubble_sort(entries: &mut [SortEntry]) {
    let len = entries.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if entries[j].key > entries[j + 1].key {
                entries.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Gnome sort: a single cursor that swaps and retreats on an inversion and advances
/// otherwise. Stable.
pub fn gnome_sort(entries: &mut [SortEntry]) {
    let mut cursor = 0;
    while cursor < entries.len() {
        if cursor == 0 || entries[cursor - 1].key <= entries[cursor].key {
            cursor += 1;
        } else {
            entries.swap(cursor - 1, cursor);
            cursor -= 1;
        }
    }
}

/// Insertion sort that binary-searches the sorted prefix for the insert point.
///
/// The insert point is the first slot holding a strictly greater key, so an entry
/// always lands after the equal keys that preceded it in the input.
pub fn binary_insertion_sort(entries: &mut [SortEntry]) {
    for i in 1..entries.len() {
        let slot = entries[..i].partition_point(|e| e.key <= entries[i].key);
        entries[slot..=i].rotate_right(1);
    }
}

/// Quicksort with the middle element as pivot.
///
/// Each partition step splits the range into strictly-less, equal, strictly-greater
/// groups, keeping the relative order inside each group, and only the two unequal
/// groups are processed further. Pending ranges live on an explicit stack.
pub fn quick_sort(entries: &mut [SortEntry]) {
    let mut pending = vec![(0, entries.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start <= 1 {
            continue;
        }
        let (less, equal) = partition(&mut entries[start..end]);
        pending.push((start + less + equal, end));
        pending.push((start, start + less));
    }
}

/// Three-way partition around the middle element. Returns the sizes of the
/// strictly-less and equal groups.
fn partition(range: &mut [SortEntry]) -> (usize, usize) {
    let pivot = &range[range.len() / 2].key;

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for (pos, entry) in range.iter().enumerate() {
        match entry.key.cmp(pivot) {
            Ordering::Less => less.push(pos),
            Ordering::Equal => equal.push(pos),
            Ordering::Greater => greater.push(pos),
        }
    }

    let (less_len, equal_len) = (less.len(), equal.len());
    let mut order = less;
    order.extend(equal);
    order.extend(greater);
    apply_permutation(range, order);

    (less_len, equal_len)
}

/// Heapsort: builds a max-heap on the effective key and moves the maximum to the tail
/// until the heap is empty.
///
/// Equal keys may be reordered even when the input is already sorted; repeated sorts
/// only leave such input untouched through the engine's presorted fast path.
pub fn heap_sort(entries: &mut [SortEntry]) {
    let len = entries.len();
    for root in (0..len / 2).rev() {
        sift_down(entries, root, len);
    }
    for end in (1..len).rev() {
        entries.swap(0, end);
        sift_down(entries, 0, end);
    }
}

fn sift_down(heap: &mut [SortEntry], mut root: usize, heap_len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap_len {
            break;
        }
        let right = left + 1;
        let child = if right < heap_len && heap[right].key > heap[left].key {
            right
        } else {
            left
        };
        if heap[child].key <= heap[root].key {
            break;
        }
        heap.swap(root, child);
        root = child;
    }
}

/// Slot of the bitonic network: a position in the input plus a padding tag.
#[derive(Clone, Copy)]
struct Slot {
    pos: usize,
    padding: bool,
}

/// Bitonic sort.
///
/// The network needs a power-of-two length, so the input is padded by repeating its
/// last element. Padding slots order after every real element, which keeps them out
/// of the first `len` slots that are read back. Real slots with equal keys compare by
/// input position, so the network output does not depend on how ties meet.
pub fn bitonic_sort(entries: &mut [SortEntry]) {
    let len = entries.len();
    if len <= 1 {
        return;
    }

    let padded_len = len.next_power_of_two();
    let mut slots: Vec<Slot> = (0..len)
        .map(|pos| Slot {
            pos,
            padding: false,
        })
        .chain((len..padded_len).map(|_| Slot {
            pos: len - 1,
            padding: true,
        }))
        .collect();

    let keyed: &[SortEntry] = entries;
    let cmp = |a: &Slot, b: &Slot| {
        a.padding
            .cmp(&b.padding)
            .then_with(|| keyed[a.pos].key.cmp(&keyed[b.pos].key))
            .then_with(|| a.pos.cmp(&b.pos))
    };
    bitonic_network(&mut slots, true, &cmp);

    let order: Vec<usize> = slots.iter().take(len).map(|s| s.pos).collect();
    apply_permutation(entries, order);
}

fn bitonic_network<F>(slots: &mut [Slot], ascending: bool, cmp: &F)
where
    F: Fn(&Slot, &Slot) -> Ordering,
{
    if slots.len() <= 1 {
        return;
    }
    let half = slots.len() / 2;
    bitonic_network(&mut slots[..half], true, cmp);
    bitonic_network(&mut slots[half..], false, cmp);
    bitonic_merge(slots, ascending, cmp);
}

fn bitonic_merge<F>(slots: &mut [Slot], ascending: bool, cmp: &F)
where
    F: Fn(&Slot, &Slot) -> Ordering,
{
    if slots.len() <= 1 {
        return;
    }
    let half = slots.len() / 2;
    let misplaced = if ascending {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    for i in 0..half {
        if cmp(&slots[i], &slots[i + half]) == misplaced {
            slots.swap(i, i + half);
        }
    }
    bitonic_merge(&mut slots[..half], ascending, cmp);
    bitonic_merge(&mut slots[half..], ascending, cmp);
}

/// Tree sort over an index-linked binary search tree.
///
/// Equal keys go to the right subtree, so the in-order walk returns them in insertion
/// order.
pub fn tree_sort(entries: Vec<SortEntry>) -> Vec<SortEntry> {
    let mut tree = TreeArena::with_capacity(entries.len());
    for entry in entries {
        tree.insert(entry);
    }
    tree.into_sorted()
}

struct Node {
    entry: SortEntry,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree whose nodes live in one vector and link to each other by index.
struct TreeArena {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl TreeArena {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    fn insert(&mut self, entry: SortEntry) {
        let id = self.nodes.len();

        if let Some(mut cursor) = self.root {
            loop {
                let node = &self.nodes[cursor];
                let goes_left = entry.key < node.entry.key;
                let child = if goes_left { node.left } else { node.right };
                match child {
                    Some(next) => cursor = next,
                    None => {
                        let parent = &mut self.nodes[cursor];
                        if goes_left {
                            parent.left = Some(id);
                        } else {
                            parent.right = Some(id);
                        }
                        break;
                    }
                }
            }
        } else {
            self.root = Some(id);
        }

        self.nodes.push(Node {
            entry,
            left: None,
            right: None,
        });
    }

    /// In-order walk with an explicit stack, so degenerate trees cannot overflow the
    /// call stack.
    fn into_sorted(self) -> Vec<SortEntry> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            order.push(id);
            cursor = self.nodes[id].right;
        }

        // Node ids are insertion positions, so `order` permutes the entries directly.
        let mut entries: Vec<SortEntry> = self.nodes.into_iter().map(|n| n.entry).collect();
        apply_permutation(&mut entries, order);
        entries
    }
}
