// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Merging of anchored conflicts into one conflict per cluster of shared visits.

use std::collections::HashMap;

use model::base_types::{Idx, VisitIdx};
use model::Visits;

use crate::conflict::Conflict;

/// Disjoint sets over the visit arena, with path halving.
struct DisjointSets {
    parent: Vec<Idx>,
}

impl DisjointSets {
    fn new(size: usize) -> DisjointSets {
        DisjointSets {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut x: Idx) -> Idx {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: Idx, b: Idx) {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a != root_b {
            self.parent[root_b.max(root_a)] = root_b.min(root_a);
        }
    }
}

/// Anchored conflicts that share at least one visit (transitively) form a cluster. Each cluster
/// is reported once: its visits in table order, required length and time of its worst anchored
/// conflict (the first one on ties). Clusters keep the order of their first anchored conflict.
pub fn group_conflicts(conflicts: Vec<Conflict>, visits: &Visits) -> Vec<Conflict> {
    let mut sets = DisjointSets::new(visits.len());
    for conflict in conflicts.iter() {
        let anchor = conflict.anchor().idx();
        for v in conflict.visits() {
            sets.union(anchor, v.idx());
        }
    }

    // (members, index of worst conflict)
    let mut clusters: Vec<(Vec<VisitIdx>, usize)> = Vec::new();
    let mut cluster_of_root: HashMap<Idx, usize> = HashMap::new();
    for (i, conflict) in conflicts.iter().enumerate() {
        let root = sets.find(conflict.anchor().idx());
        let c = *cluster_of_root.entry(root).or_insert_with(|| {
            clusters.push((Vec::new(), i));
            clusters.len() - 1
        });
        let (members, worst) = &mut clusters[c];
        members.extend_from_slice(conflict.visits());
        if conflict.required_length() > conflicts[*worst].required_length() {
            *worst = i;
        }
    }

    clusters
        .into_iter()
        .map(|(mut members, worst)| {
            members.sort_unstable();
            members.dedup();
            let worst = &conflicts[worst];
            Conflict::new(
                worst.platform_id().clone(),
                worst.time().to_string(),
                members,
                visits,
                worst.required_length(),
                worst.available_length(),
            )
        })
        .collect()
}
