use egret_graph::{Edge, Error, Graph, WeightedEdge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Color {
    White,
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ColoredEdge {
    source: u32,
    target: u32,
    length: u64,
    color: Color,
}

impl ColoredEdge {
    fn new(source: u32, target: u32, length: u64, color: Color) -> Self {
        Self {
            source,
            target,
            length,
            color,
        }
    }
}

impl Edge<u32> for ColoredEdge {
    fn source(&self) -> &u32 {
        &self.source
    }

    fn target(&self) -> &u32 {
        &self.target
    }

    fn opposite(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            ..self.clone()
        }
    }
}

impl WeightedEdge<u32> for ColoredEdge {
    fn weight(&self) -> f64 {
        self.length as f64
    }
}

fn colored_graph() -> Graph<u32, ColoredEdge> {
    let mut g = Graph::undirected(|s: &u32, t: &u32| ColoredEdge::new(*s, *t, 0, Color::White));
    for v in 0..4 {
        g.add_vertex(v);
    }
    g
}

#[test]
fn factory_builds_edges_with_default_payload() {
    let mut g = colored_graph();
    g.add_edge(&0, &1).unwrap();

    let edge = ColoredEdge::new(0, 1, 0, Color::White);
    assert!(g.contains_edge(&edge));
    assert!(g.contains_edge(&edge.opposite()));
    assert_eq!(edge.weight(), <ColoredEdge as WeightedEdge<u32>>::DEFAULT_WEIGHT);
}

#[test]
fn prebuilt_edges_keep_their_payload() {
    let mut g = colored_graph();
    let red = ColoredEdge::new(1, 2, 42, Color::Red);
    g.insert_edge(red.clone()).unwrap();

    let stored = g.outgoing_edges(&2).unwrap().iter().next().cloned();
    assert_eq!(stored, Some(red.clone()));
    assert_eq!(red.weight(), 42.0);
}

#[test]
fn payload_is_part_of_edge_identity() {
    let mut g = colored_graph();
    g.insert_edge(ColoredEdge::new(1, 2, 5, Color::Red)).unwrap();

    // Same endpoints, different payload: a distinct edge.
    g.insert_edge(ColoredEdge::new(1, 2, 5, Color::Blue)).unwrap();
    assert_eq!(g.edge_count(), 2);

    assert_eq!(
        g.insert_edge(ColoredEdge::new(2, 1, 5, Color::Red)),
        Err(Error::DuplicateEdge)
    );
    assert!(!g.contains_edge(&ColoredEdge::new(1, 2, 6, Color::Red)));
}

#[test]
fn directed_payload_graph_uses_factory_per_edge() {
    let mut g: Graph<u32, ColoredEdge> =
        Graph::directed(|s, t| ColoredEdge::new(*s, *t, u64::from(s + t), Color::Blue));
    g.add_vertex(3).add_vertex(4);
    g.add_edge(&3, &4).unwrap();
    g.add_edge(&4, &3).unwrap();

    assert!(g.contains_edge(&ColoredEdge::new(3, 4, 7, Color::Blue)));
    assert!(g.contains_edge(&ColoredEdge::new(4, 3, 7, Color::Blue)));
    assert_eq!(g.outgoing_edges(&3).unwrap().len(), 1);
    assert_eq!(g.incoming_edges(&3).unwrap().len(), 1);
}
