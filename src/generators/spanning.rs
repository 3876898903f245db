//! Greedy nearest-unconnected growth of a spanning tree over room indices.

/// Grows a tree over `len` nodes from `root` by repeatedly attaching the unconnected
/// node closest to any connected node.
///
/// Ties follow a scan of connected nodes in attachment order and unconnected ones in
/// ascending index order where only a strictly smaller distance replaces the current
/// best. Each node keeps its closest connected node, so a run costs O(len²)
/// distance evaluations.
///
/// Returns edges as `(connected, newly attached)` in attachment order, `len - 1` of
/// them, or none when `len < 2`.
pub fn grow_spanning_tree<F>(len: usize, root: usize, distance: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> u32,
{
    if len < 2 || root >= len {
        return Vec::new();
    }

    let mut connected = Vec::with_capacity(len);
    connected.push(root);
    let mut in_tree = vec![false; len];
    in_tree[root] = true;
    // Per node: distance to the closest connected node and that node's attachment position
    let mut closest = (0..len).map(|j| (distance(root, j), 0)).collect::<Vec<_>>();
    let mut edges = Vec::with_capacity(len - 1);

    while connected.len() < len {
        let Some(next) = (0..len)
            .filter(|&j| !in_tree[j])
            .min_by_key(|&j| (closest[j], j))
        else {
            break;
        };
        let (_, position) = closest[next];
        edges.push((connected[position], next));

        in_tree[next] = true;
        let position = connected.len();
        connected.push(next);
        for j in (0..len).filter(|&j| !in_tree[j]) {
            let dist = distance(next, j);
            // Strict so that earlier attached nodes keep their ties
            if dist < closest[j].0 {
                closest[j] = (dist, position);
            }
        }
    }
    edges
}

/// Pairwise distances between nodes, stored as the strict upper triangle.
pub struct DistanceMatrix {
    len: usize,
    data: Vec<u32>,
}

impl DistanceMatrix {
    pub fn new<F>(len: usize, distance: F) -> Self
    where
        F: Fn(usize, usize) -> u32,
    {
        let mut data = Vec::with_capacity(len * len.saturating_sub(1) / 2);
        for i in 0..len {
            for j in i + 1..len {
                data.push(distance(i, j));
            }
        }
        DistanceMatrix { len, data }
    }

    /// Distance between `i` and `j`; zero on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if lo == hi {
            return 0;
        }
        // Rows before `lo` hold (len - 1) + (len - 2) + ... + (len - lo) entries
        let row_start = lo * (2 * self.len - lo - 1) / 2;
        self.data[row_start + (hi - lo - 1)]
    }
}
