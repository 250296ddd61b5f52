pub struct DisjointSet(Vec<usize>);

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (old, new) = (self.0[u], self.0[v]);
        if old == new {
            return false;
        }
        for label in &mut self.0 {
            if *label == old {
                *label = new;
            }
        }
        true
    }
    pub fn equiv(&self, u: usize, v: usize) -> bool {
        self.repr(u) == self.repr(v)
    }
    pub fn repr(&self, u: usize) -> usize { self.0[u] }
    pub fn count(&self, u: usize) -> usize {
        let n = self.0.len();
        (0..n).filter(|&i| self.0[i] == self.0[u]).count()
    }
    // a label stays live while its group keeps it, so `self.0[l] == l`
    pub fn group_count(&self) -> usize {
        let n = self.0.len();
        (0..n).filter(|&i| self.0[i] == i).count()
    }
    pub fn members(&self, u: usize) -> Vec<usize> {
        let n = self.0.len();
        (0..n).filter(|&i| self.0[i] == self.0[u]).collect()
    }
}

#[test]
fn sanity_check() {
    let mut ds = DisjointSet::new(4);
    assert_eq!(ds.group_count(), 4);
    assert!(ds.unite(2, 3));
    assert!(ds.unite(2, 1));
    assert!(!ds.unite(3, 1));
    assert!(ds.equiv(1, 3));
    assert!(!ds.equiv(0, 3));
    assert_eq!(ds.count(3), 3);
    assert_eq!(ds.members(3), [1, 2, 3]);
    assert_eq!(ds.group_count(), 2);
}
