//! Longest common subsequence over word tokens.
//!
//! A dense dynamic-programming table with backtracking handles the typical
//! clipboard-sized input; long documents fall back to Hirschberg's
//! divide-and-conquer reconstruction, which keeps memory proportional to one
//! table row instead of the whole table. Both paths resolve equally long
//! alternatives the same way, so the returned subsequence is stable across
//! input sizes.

/// Inputs whose table would exceed this many cells take the
/// divide-and-conquer path instead of allocating the full table.
const DENSE_CELL_LIMIT: usize = 1 << 20;

/// Compute a longest common subsequence of two token sequences.
///
/// Order-preserving and not necessarily contiguous, with exact string
/// equality between tokens. When several subsequences of maximal length
/// exist, backtracking moves up (drops the tail of `a`) before it moves
/// left (drops the tail of `b`) on equal table values; callers can rely on
/// that choice staying fixed.
pub fn longest_common_subsequence<'a>(a: &[&'a str], b: &[&str]) -> Vec<&'a str> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    match a.len().checked_mul(b.len()) {
        Some(cells) if cells <= DENSE_CELL_LIMIT => dense(a, b),
        _ => hirschberg(a, b),
    }
}

/// Length of the longest common subsequence, in O(min(|a|,|b|)) space.
///
/// Useful when only change counts are needed: the number of added words is
/// `|b| - common_len` and the number of removed words is `|a| - common_len`.
pub fn common_len(a: &[&str], b: &[&str]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let row = lcs_row(outer, inner);
    row[inner.len()]
}

/// Full table plus backtracking.
///
/// `table[i][j]` holds the subsequence length of `a[..i]` and `b[..j]`;
/// matching tokens extend the diagonal, everything else takes the larger
/// neighbor.
fn dense<'a>(a: &[&'a str], b: &[&str]) -> Vec<&'a str> {
    let m = a.len();
    let n = b.len();

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut subsequence = Vec::with_capacity(table[m][n]);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            // Equal values move up, never left
            i -= 1;
        } else {
            j -= 1;
        }
    }

    subsequence.reverse();
    subsequence
}

/// Final table row: `row[j]` is the subsequence length of `a` and `b[..j]`.
fn lcs_row(a: &[&str], b: &[&str]) -> Vec<usize> {
    let mut row = vec![0usize; b.len() + 1];
    for x in a {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let current = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                row[j + 1].max(row[j])
            };
            diagonal = current;
        }
    }
    row
}

/// `row[j]` is the subsequence length of `a` and `b[j..]`.
fn rev_lcs_row(a: &[&str], b: &[&str]) -> Vec<usize> {
    let reversed_a: Vec<&str> = a.iter().rev().copied().collect();
    let reversed_b: Vec<&str> = b.iter().rev().copied().collect();
    let mut row = lcs_row(&reversed_a, &reversed_b);
    row.reverse();
    row
}

/// Hirschberg divide-and-conquer reconstruction.
///
/// Splits `a` in half, finds the column of `b` where an optimal path
/// crosses the split row via one forward and one backward length row, and
/// recurses on both halves. Splitting at the rightmost maximizing column
/// keeps the result value-equal to the dense backtrack, which also hugs
/// the right edge of the table on ties.
fn hirschberg<'a>(a: &[&'a str], b: &[&str]) -> Vec<&'a str> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len() == 1 {
        return if b.contains(&a[0]) {
            vec![a[0]]
        } else {
            Vec::new()
        };
    }

    let mid = a.len() / 2;
    let forward = lcs_row(&a[..mid], b);
    let backward = rev_lcs_row(&a[mid..], b);

    let mut split = 0;
    let mut best = 0;
    for j in 0..=b.len() {
        let joint = forward[j] + backward[j];
        if joint >= best {
            best = joint;
            split = j;
        }
    }

    let mut subsequence = hirschberg(&a[..mid], &b[..split]);
    subsequence.extend(hirschberg(&a[mid..], &b[split..]));
    subsequence
}
