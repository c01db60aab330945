// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use tracelane::layout::{layout_rails, segment};
use tracelane::model::LineRange;

mod fixtures;
mod settings;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.segment`, `layout.rails`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_layout(c: &mut Criterion) {
    let cases = [
        fixtures::Case::Small,
        fixtures::Case::MediumLoops,
        fixtures::Case::LargeManySubflows,
    ];

    {
        let mut group = c.benchmark_group("layout.segment");
        for case in cases {
            let checkpoints = fixtures::checkpoints(case.params());
            group.throughput(Throughput::Elements(checkpoints.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter_batched(
                    || checkpoints.clone(),
                    |checkpoints| black_box(segment(checkpoints).len()),
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("layout.rails");
        for case in cases {
            let params = case.params();
            let checkpoints = fixtures::checkpoints(params);
            let range = LineRange::inclusive(1, params.lines);
            group.throughput(Throughput::Elements(u64::from(params.lines)));
            group.bench_function(case.id(), move |b| {
                b.iter_batched(
                    || segment(checkpoints.clone()).into_subflows(),
                    |subflows| {
                        let layout = layout_rails(subflows, black_box(range));
                        black_box(layout.rows().len().wrapping_add(layout.dots().len()))
                    },
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = settings::criterion();
    targets = benches_layout
}
criterion_main!(benches);
