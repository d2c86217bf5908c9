use self::transition::{Error, Index};

pub mod oracle;
pub mod transition;

#[inline]
fn span(dependent: usize, head: Index) -> (usize, usize) {
    let head = head as usize;
    (dependent.min(head), dependent.max(head))
}

fn check_heads(heads: &[Index]) -> Result<(), Error> {
    let n = heads.len();
    if heads.iter().any(|&head| head as usize >= n) {
        Err(Error::InvalidArgument)
    } else {
        Ok(())
    }
}

/// Distance from `index` to the root; fails on a cycle.
fn depth(heads: &[Index], index: usize) -> Result<usize, Error> {
    let mut depth = 0;
    let mut j = index;
    while j != 0 {
        depth += 1;
        if depth > heads.len() {
            return Err(Error::InvalidArgument);
        }
        j = heads[j] as usize;
    }
    Ok(depth)
}

/// Whether no two arcs of the tree cross, root arcs included.
pub fn is_projective(heads: &[Index]) -> bool {
    let arcs: Vec<(usize, usize)> = heads
        .iter()
        .enumerate()
        .skip(1)
        .map(|(dependent, &head)| span(dependent, head))
        .collect();
    for (i, &(l1, r1)) in arcs.iter().enumerate() {
        for &(l2, r2) in &arcs[i + 1..] {
            if (l1 < l2 && l2 < r1 && r1 < r2) || (l2 < l1 && l1 < r2 && r2 < r1) {
                return false;
            }
        }
    }
    true
}

/// Projectivizes a dependency tree by repeatedly lifting the deepest crossing
/// arc to the grandparent.
///
/// References:
/// - https://github.com/tensorflow/models/blob/7d30a017fe50b648be6dee544f8059bde52db562/syntaxnet/syntaxnet/document_filters.cc#L296
pub fn projectivize(heads: &[Index]) -> Result<Vec<Index>, Error> {
    check_heads(heads)?;
    let mut heads = heads.to_vec();
    let num_tokens = heads.len();
    let mut left: Vec<isize> = vec![-1; num_tokens];
    let mut right: Vec<isize> = vec![num_tokens as isize; num_tokens];
    loop {
        for i in 0..num_tokens {
            left[i] = -1;
            right[i] = num_tokens as isize;
        }

        for (i, &head) in heads.iter().enumerate().skip(1) {
            let (l, r) = span(i, head);
            for j in (l + 1)..r {
                left[j] = left[j].max(l as isize);
                right[j] = right[j].min(r as isize);
            }
        }

        let mut deepest_arc = None;
        let mut max_depth = 0;
        for (i, &head) in heads.iter().enumerate().skip(1) {
            if head == 0 {
                continue;
            }
            let (l, r) = span(i, head);
            let left_bound = left[l].max(left[r]);
            let right_bound = right[l].min(right[r]);

            if (l as isize) < left_bound || (r as isize) > right_bound {
                let d = depth(&heads, i)?;
                if d > max_depth {
                    deepest_arc = Some(i);
                    max_depth = d;
                }
            }
        }

        match deepest_arc {
            Some(i) => {
                let lifted_head = heads[heads[i] as usize];
                heads[i] = lifted_head;
            }
            None => return Ok(heads),
        }
    }
}
