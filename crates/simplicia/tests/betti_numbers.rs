//! End-to-end Betti number checks driven through the text loader.

use simplicia::{load_from_reader, SimplicialComplex};

fn load(input: &str) -> SimplicialComplex {
    let mut complex = SimplicialComplex::with_capacity(input.lines().count());
    load_from_reader(&mut complex, input.as_bytes()).unwrap();
    complex
}

fn betti(input: &str) -> (i64, i64, i64, bool) {
    let snapshot = load(input).betti_snapshot();
    (snapshot.b0, snapshot.b1, snapshot.b2, snapshot.unreliable)
}

#[test]
fn single_vertex() {
    assert_eq!(betti("v0\n"), (1, 0, 0, false));
}

#[test]
fn triangle_boundary() {
    let input = "\
v0
v1
v2
e0 v0 v1
e1 v1 v2
e2 v2 v0
";
    assert_eq!(betti(input), (1, 1, 0, false));
}

#[test]
fn filled_triangle() {
    let input = "\
v0
v1
v2
e0 v0 v1
e1 v1 v2
e2 v2 v0
f0 e0 e1 e2
";
    assert_eq!(betti(input), (1, 0, 0, false));
}

#[test]
fn two_disjoint_triangle_boundaries() {
    let input = "\
a0
a1
a2
p0 a0 a1
p1 a1 a2
p2 a2 a0
b0
b1
b2
q0 b0 b1
q1 b1 b2
q2 b2 b0
";
    assert_eq!(betti(input), (2, 2, 0, false));
}

#[test]
fn figure_eight_shares_a_vertex() {
    // Two 1-cycles glued at a single vertex: one component, two holes.
    let input = "\
c
l1
l2
r1
r2
el0 c l1
el1 l1 l2
el2 l2 c
er0 c r1
er1 r1 r2
er2 r2 c
";
    assert_eq!(betti(input), (1, 2, 0, false));
}

#[test]
fn hollow_tetrahedron() {
    let input = "\
v0
v1
v2
v3
e01 v0 v1
e02 v0 v2
e03 v0 v3
e12 v1 v2
e13 v1 v3
e23 v2 v3
f012 e01 e02 e12
f013 e01 e03 e13
f023 e02 e03 e23
f123 e12 e13 e23
";
    assert_eq!(betti(input), (1, 0, 1, false));
}

#[test]
fn solid_tetrahedron_flags_betti2_unreliable() {
    let input = "\
v0
v1
v2
v3
e01 v0 v1
e02 v0 v2
e03 v0 v3
e12 v1 v2
e13 v1 v3
e23 v2 v3
f012 e01 e02 e12
f013 e01 e03 e13
f023 e02 e03 e23
f123 e12 e13 e23
t0 f012 f013 f023 f123
";
    let (b0, b1, b2, unreliable) = betti(input);
    assert_eq!((b0, b1, b2), (1, 0, 1));
    assert!(unreliable);
}

#[test]
fn unreliable_flag_is_permanent() {
    let input = "\
v0
v1
v2
v3
e01 v0 v1
e02 v0 v2
e03 v0 v3
e12 v1 v2
e13 v1 v3
e23 v2 v3
f012 e01 e02 e12
f013 e01 e03 e13
f023 e02 e03 e23
f123 e12 e13 e23
t0 f012 f013 f023 f123
w0
";
    let (b0, _, _, unreliable) = betti(input);
    // The extra vertex still counts; the flag stays set.
    assert_eq!(b0, 2);
    assert!(unreliable);
}

#[test]
fn chain_is_one_component_regardless_of_order() {
    let n = 50;
    let mut ltr = String::new();
    let mut rtl = String::new();
    for i in 0..n {
        ltr.push_str(&format!("v{i}\n"));
        rtl.push_str(&format!("v{i}\n"));
    }
    for i in 0..n - 1 {
        ltr.push_str(&format!("e{i} v{i} v{}\n", i + 1));
        rtl.push_str(&format!("e{i} v{} v{}\n", n - 1 - i, n - 2 - i));
    }
    assert_eq!(betti(&ltr), (1, 0, 0, false));
    assert_eq!(betti(&rtl), (1, 0, 0, false));
}
