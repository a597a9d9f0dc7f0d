// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backing overlap rule
//!
//! Intersecting plan footprints are always structurally invalid: two
//! pieces of blocking cannot occupy the same wall cavity. Every
//! unordered pair is reported once, with a minimum-translation
//! relocation suggestion for the later-placed backing.

use crate::resolution::overlap_resolution;
use crate::rules::RuleContext;
use backing_core::{Clash, ClashType, Severity};
use rayon::prelude::*;

pub fn check(ctx: &RuleContext) -> Vec<Clash> {
    let footprints: Vec<_> = ctx.backings.iter().map(|b| b.footprint()).collect();

    // O(n^2) pair scan; parallel over the first index, then sorted by
    // pair index so the result order matches a sequential scan.
    let mut hits: Vec<(usize, usize)> = (0..ctx.backings.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let footprints = &footprints;
            (i + 1..footprints.len())
                .filter(move |&j| footprints[i].overlaps(&footprints[j]))
                .map(move |j| (i, j))
        })
        .collect();
    hits.sort_unstable();

    hits.into_iter()
        .map(|(i, j)| {
            let (first, second) = (ctx.backings[i], ctx.backings[j]);
            let mut clash = Clash::new(
                ClashType::BackingOverlap,
                Severity::Error,
                vec![first.id.clone(), second.id.clone()],
            );
            if let Some(text) =
                overlap_resolution(&footprints[i], &footprints[j], &second.id)
            {
                clash = clash.with_resolution(text);
            }
            clash
        })
        .collect()
}
