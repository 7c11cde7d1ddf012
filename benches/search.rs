use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stig::{a_star, shortest_path, AdjacencyList, Node, NodeMap, PriorityQueue, Weight};

fn grid(side: usize) -> (AdjacencyList, NodeMap<(usize, usize)>, Vec<Node>) {
    let mut g = AdjacencyList::with_capacity(side * side);
    let mut coords = NodeMap::with_capacity(side * side);
    let mut nodes = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            let n = g.add_node();
            coords.insert(n, (x, y));
            nodes.push(n);
        }
    }
    for y in 0..side {
        for x in 0..side {
            let i = x + side * y;
            if x + 1 < side {
                g.add_bidirectional_edge(nodes[i], nodes[i + 1], 1.0);
            }
            if y + 1 < side {
                g.add_bidirectional_edge(nodes[i], nodes[i + side], 1.0);
            }
        }
    }
    (g, coords, nodes)
}

fn bench_grid(c: &mut Criterion, side: usize) {
    let (g, coords, nodes) = grid(side);
    let start = nodes[0];
    let goal = *nodes.last().unwrap();
    let (gx, gy) = coords[goal];
    let h = move |n: &Node| {
        let (x, y) = coords[*n];
        (gx.abs_diff(x) + gy.abs_diff(y)) as Weight
    };

    c.bench_function(&format!("astar_grid_{}", side), |b| {
        b.iter(|| {
            let res = a_star(black_box(&g), black_box(start), black_box(goal), &h);
            assert!(res.is_some());
        })
    });

    c.bench_function(&format!("dijkstra_grid_{}", side), |b| {
        b.iter(|| {
            let res = shortest_path(black_box(&g), black_box(start), black_box(goal));
            assert!(res.is_some());
        })
    });
}

fn queue_churn(c: &mut Criterion) {
    c.bench_function("queue_churn", |b| {
        b.iter(|| {
            let mut q = PriorityQueue::with_capacity(1024);
            for i in 0..1024usize {
                q.push(i, ((i * 2654435761) % 4093) as Weight);
            }
            for i in (0..1024).step_by(2) {
                q.push(i, ((i * 40503) % 1021) as Weight);
            }
            while let Ok(e) = q.pop_min() {
                black_box(e);
            }
        })
    });
}

pub fn grid_small(c: &mut Criterion) {
    bench_grid(c, 16);
}

pub fn grid_medium(c: &mut Criterion) {
    bench_grid(c, 64);
}

criterion_group!(benches, grid_small, grid_medium, queue_churn);
criterion_main!(benches);
