//! Composite: shapes and groups of shapes answer the same operations, so a
//! caller can render or move a whole tree without caring which is which.

// =============================================================================
// Components
// =============================================================================

pub trait Component {
    /// Depth-first render, one line per leaf.
    fn render(&self) -> Vec<String>;
    fn translate(&self, dx: i32, dy: i32) -> Vec<String>;
}

pub struct Shape {
    pub label: String,
}

impl Shape {
    pub fn new(label: impl Into<String>) -> Self {
        Shape {
            label: label.into(),
        }
    }
}

impl Component for Shape {
    fn render(&self) -> Vec<String> {
        vec![format!("render {}", self.label)]
    }

    fn translate(&self, dx: i32, dy: i32) -> Vec<String> {
        vec![format!("move {} by ({dx}, {dy})", self.label)]
    }
}

#[derive(Default)]
pub struct Group {
    children: Vec<Box<dyn Component>>,
}

impl Group {
    pub fn add(&mut self, component: Box<dyn Component>) {
        self.children.push(component);
    }
}

impl Component for Group {
    fn render(&self) -> Vec<String> {
        self.children
            .iter()
            .flat_map(|child| child.render())
            .collect()
    }

    fn translate(&self, dx: i32, dy: i32) -> Vec<String> {
        self.children
            .iter()
            .flat_map(|child| child.translate(dx, dy))
            .collect()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Composite");

    let mut squares = Group::default();
    squares.add(Box::new(Shape::new("square 1")));
    squares.add(Box::new(Shape::new("square 2")));

    let mut circles = Group::default();
    circles.add(Box::new(Shape::new("circle 1")));
    circles.add(Box::new(Shape::new("circle 2")));

    let mut all = Group::default();
    all.add(Box::new(squares));
    all.add(Box::new(circles));

    for line in all.render() {
        println!("{line}");
    }
    for line in all.translate(10, 0) {
        println!("{line}");
    }
}
