/// Indices (into `seq`) of one longest strictly increasing subsequence.
///
/// Patience sorting with predecessor links, O(n log n). Among equally long
/// candidates the one ending on the smallest tail values wins, which keeps
/// the result deterministic for a given input.
pub(crate) fn longest_increasing(seq: &[usize]) -> Vec<usize> {
    // tails[k] = index in `seq` of the smallest tail of an increasing run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let k = tails.partition_point(|&t| seq[t] < value);
        if k > 0 {
            prev[i] = Some(tails[k - 1]);
        }
        if k == tails.len() {
            tails.push(i);
        } else {
            tails[k] = i;
        }
    }

    let mut out = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        out.push(i);
        cursor = prev[i];
    }
    out.reverse();
    out
}
