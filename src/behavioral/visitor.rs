//! Visitor: add operations over a node structure without modifying the
//! node types. The HTML document uses classic trait double dispatch (the
//! node set can grow); the WAV segments use an enum accept, the natural
//! Rust form when the variant set is closed.

// =============================================================================
// HTML document: trait double dispatch
// =============================================================================

pub trait Operation {
    fn apply_to_heading(&self, heading: &HeadingNode) -> String;
    fn apply_to_anchor(&self, anchor: &AnchorNode) -> String;
}

pub trait HtmlNode {
    fn execute(&self, operation: &dyn Operation) -> String;
}

pub struct HeadingNode {
    pub text: String,
}

impl HtmlNode for HeadingNode {
    fn execute(&self, operation: &dyn Operation) -> String {
        operation.apply_to_heading(self)
    }
}

pub struct AnchorNode {
    pub href: String,
}

impl HtmlNode for AnchorNode {
    fn execute(&self, operation: &dyn Operation) -> String {
        operation.apply_to_anchor(self)
    }
}

pub struct HighlightOperation;

impl Operation for HighlightOperation {
    fn apply_to_heading(&self, heading: &HeadingNode) -> String {
        format!("highlight-heading({})", heading.text)
    }

    fn apply_to_anchor(&self, anchor: &AnchorNode) -> String {
        format!("highlight-anchor({})", anchor.href)
    }
}

pub struct PlainTextOperation;

impl Operation for PlainTextOperation {
    fn apply_to_heading(&self, heading: &HeadingNode) -> String {
        format!("text-heading({})", heading.text)
    }

    fn apply_to_anchor(&self, anchor: &AnchorNode) -> String {
        format!("text-anchor({})", anchor.href)
    }
}

#[derive(Default)]
pub struct HtmlDocument {
    nodes: Vec<Box<dyn HtmlNode>>,
}

impl HtmlDocument {
    pub fn add(&mut self, node: Box<dyn HtmlNode>) {
        self.nodes.push(node);
    }

    /// Applies the operation to every node, in insertion order.
    pub fn execute(&self, operation: &dyn Operation) -> Vec<String> {
        self.nodes
            .iter()
            .map(|node| node.execute(operation))
            .collect()
    }
}

// =============================================================================
// WAV file: enum accept over a closed segment set
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Format,
    Fact,
}

pub trait AudioFilter {
    fn name(&self) -> &str;

    fn apply_to_format(&self) -> String;
    fn apply_to_fact(&self) -> String;
}

impl Segment {
    pub fn apply(&self, filter: &dyn AudioFilter) -> String {
        match self {
            Segment::Format => filter.apply_to_format(),
            Segment::Fact => filter.apply_to_fact(),
        }
    }
}

pub struct NoiseReduction;

impl AudioFilter for NoiseReduction {
    fn name(&self) -> &str {
        "noise-reduction"
    }

    fn apply_to_format(&self) -> String {
        "noise reduction on format segment".to_string()
    }

    fn apply_to_fact(&self) -> String {
        "noise reduction on fact segment".to_string()
    }
}

pub struct Reverb;

impl AudioFilter for Reverb {
    fn name(&self) -> &str {
        "reverb"
    }

    fn apply_to_format(&self) -> String {
        "reverb on format segment".to_string()
    }

    fn apply_to_fact(&self) -> String {
        "reverb on fact segment".to_string()
    }
}

pub struct Normalize;

impl AudioFilter for Normalize {
    fn name(&self) -> &str {
        "normalize"
    }

    fn apply_to_format(&self) -> String {
        "normalize on format segment".to_string()
    }

    fn apply_to_fact(&self) -> String {
        "normalize on fact segment".to_string()
    }
}

pub struct WavFile {
    segments: Vec<Segment>,
}

impl WavFile {
    /// Stub reader: one format segment followed by three fact segments.
    pub fn read(_file_name: &str) -> Self {
        WavFile {
            segments: vec![
                Segment::Format,
                Segment::Fact,
                Segment::Fact,
                Segment::Fact,
            ],
        }
    }

    pub fn apply_filter(&self, filter: &dyn AudioFilter) -> Vec<String> {
        self.segments
            .iter()
            .map(|segment| segment.apply(filter))
            .collect()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Visitor");

    let mut document = HtmlDocument::default();
    document.add(Box::new(HeadingNode {
        text: "Patterns".to_string(),
    }));
    document.add(Box::new(AnchorNode {
        href: "#visitor".to_string(),
    }));
    for line in document.execute(&HighlightOperation) {
        println!("{line}");
    }
    for line in document.execute(&PlainTextOperation) {
        println!("{line}");
    }

    let wav = WavFile::read("myfile.wav");
    for filter in [
        &NoiseReduction as &dyn AudioFilter,
        &Reverb,
        &Normalize,
    ] {
        println!("applying {}", filter.name());
        for line in wav.apply_filter(filter) {
            println!("  {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_visit_nodes_in_insertion_order() {
        let mut document = HtmlDocument::default();
        document.add(Box::new(HeadingNode {
            text: "h".to_string(),
        }));
        document.add(Box::new(AnchorNode {
            href: "a".to_string(),
        }));
        assert_eq!(
            document.execute(&HighlightOperation),
            ["highlight-heading(h)", "highlight-anchor(a)"]
        );
    }

    #[test]
    fn new_operations_need_no_node_changes() {
        let mut document = HtmlDocument::default();
        document.add(Box::new(HeadingNode {
            text: "h".to_string(),
        }));
        assert_eq!(document.execute(&PlainTextOperation), ["text-heading(h)"]);
    }

    #[test]
    fn wav_filters_visit_every_segment() {
        let wav = WavFile::read("myfile.wav");
        let lines = wav.apply_filter(&Normalize);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "normalize on format segment");
        assert!(lines[1..].iter().all(|l| l == "normalize on fact segment"));
    }
}
