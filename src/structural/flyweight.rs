//! Flyweight: share one instance of heavy immutable state between many
//! objects. The factory caches flyweights in a map; requesting the same
//! key twice hands back the same `Rc`.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

// =============================================================================
// Map points sharing icons
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointType {
    Hospital,
    Cafe,
    Restaurant,
}

/// The flyweight: the icon bytes are the heavy part and never vary per
/// point.
pub struct PointIcon {
    pub point_type: PointType,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct PointIconFactory {
    icons: HashMap<PointType, Rc<PointIcon>>,
}

impl PointIconFactory {
    pub fn icon(&mut self, point_type: PointType) -> Rc<PointIcon> {
        Rc::clone(self.icons.entry(point_type).or_insert_with(|| {
            Rc::new(PointIcon {
                point_type,
                bytes: vec![0; 16],
            })
        }))
    }
}

pub struct Point {
    pub x: i32,
    pub y: i32,
    pub icon: Rc<PointIcon>,
}

impl Point {
    pub fn draw(&self) -> String {
        format!("{:?} at ({}, {})", self.icon.point_type, self.x, self.y)
    }
}

pub struct PointService {
    factory: PointIconFactory,
}

impl PointService {
    pub fn new(factory: PointIconFactory) -> Self {
        PointService { factory }
    }

    pub fn points(&mut self) -> Vec<Point> {
        vec![
            Point {
                x: 1,
                y: 2,
                icon: self.factory.icon(PointType::Cafe),
            },
            Point {
                x: 4,
                y: 4,
                icon: self.factory.icon(PointType::Cafe),
            },
            Point {
                x: 9,
                y: 0,
                icon: self.factory.icon(PointType::Hospital),
            },
        ]
    }
}

// =============================================================================
// Spreadsheet cells sharing formatting contexts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAttributes {
    pub font_family: String,
    pub font_size: u32,
    pub bold: bool,
}

#[derive(Default)]
pub struct CellContextFactory {
    contexts: HashMap<CellAttributes, Rc<CellAttributes>>,
}

impl CellContextFactory {
    pub fn context(
        &mut self,
        font_family: impl Into<String>,
        font_size: u32,
        bold: bool,
    ) -> Rc<CellAttributes> {
        let key = CellAttributes {
            font_family: font_family.into(),
            font_size,
            bold,
        };
        Rc::clone(
            self.contexts
                .entry(key.clone())
                .or_insert_with(|| Rc::new(key)),
        )
    }

    pub fn cached(&self) -> usize {
        self.contexts.len()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CellError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} sheet")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

struct Cell {
    content: String,
    context: Rc<CellAttributes>,
}

pub struct SpreadSheet {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    factory: CellContextFactory,
}

impl SpreadSheet {
    pub fn new(rows: usize, cols: usize, mut factory: CellContextFactory) -> Self {
        let default_context = factory.context("Times New Roman", 12, false);
        let cells = (0..rows * cols)
            .map(|_| Cell {
                content: String::new(),
                context: Rc::clone(&default_context),
            })
            .collect();
        SpreadSheet {
            rows,
            cols,
            cells,
            factory,
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, CellError> {
        if row >= self.rows || col >= self.cols {
            return Err(CellError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn set_content(
        &mut self,
        row: usize,
        col: usize,
        content: impl Into<String>,
    ) -> Result<(), CellError> {
        let index = self.index(row, col)?;
        self.cells[index].content = content.into();
        Ok(())
    }

    /// Swaps the cell onto a shared context with the new family, keeping
    /// its current size and weight.
    pub fn set_font_family(
        &mut self,
        row: usize,
        col: usize,
        font_family: &str,
    ) -> Result<(), CellError> {
        let index = self.index(row, col)?;
        let current = Rc::clone(&self.cells[index].context);
        self.cells[index].context =
            self.factory
                .context(font_family, current.font_size, current.bold);
        Ok(())
    }

    pub fn context_at(&self, row: usize, col: usize) -> Result<Rc<CellAttributes>, CellError> {
        let index = self.index(row, col)?;
        Ok(Rc::clone(&self.cells[index].context))
    }

    pub fn shared_contexts(&self) -> usize {
        self.factory.cached()
    }

    pub fn render(&self) -> Vec<String> {
        (0..self.rows)
            .flat_map(|row| {
                (0..self.cols).map(move |col| {
                    let cell = &self.cells[row * self.cols + col];
                    format!(
                        "({row}, {col}): {} [{}]",
                        cell.content, cell.context.font_family
                    )
                })
            })
            .collect()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Flyweight");

    let mut service = PointService::new(PointIconFactory::default());
    let points = service.points();
    for point in &points {
        println!("{}", point.draw());
    }
    println!(
        "both cafes share one icon: {}",
        Rc::ptr_eq(&points[0].icon, &points[1].icon)
    );

    let mut sheet = SpreadSheet::new(3, 3, CellContextFactory::default());
    if let Err(err) = run_sheet(&mut sheet) {
        println!("{err}");
    }
    for line in sheet.render() {
        println!("{line}");
    }
    println!("distinct contexts cached: {}", sheet.shared_contexts());
}

fn run_sheet(sheet: &mut SpreadSheet) -> Result<(), CellError> {
    sheet.set_content(0, 0, "Hello")?;
    sheet.set_content(1, 0, "World")?;
    sheet.set_font_family(0, 0, "Arial")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_type_shares_one_icon() {
        let mut factory = PointIconFactory::default();
        let a = factory.icon(PointType::Cafe);
        let b = factory.icon(PointType::Cafe);
        let c = factory.icon(PointType::Hospital);
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
    }

    #[test]
    fn cell_contexts_are_shared_by_attribute_value() {
        let mut factory = CellContextFactory::default();
        let a = factory.context("Arial", 12, false);
        let b = factory.context("Arial", 12, false);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.cached(), 1);
    }

    #[test]
    fn changing_one_cells_font_keeps_the_rest_shared() {
        let mut sheet = SpreadSheet::new(3, 3, CellContextFactory::default());
        sheet.set_font_family(0, 0, "Arial").unwrap();

        let changed = sheet.context_at(0, 0).unwrap();
        let untouched = sheet.context_at(1, 1).unwrap();
        let other = sheet.context_at(2, 2).unwrap();

        assert_eq!(changed.font_family, "Arial");
        assert!(Rc::ptr_eq(&untouched, &other));
        assert_eq!(sheet.shared_contexts(), 2);
    }

    #[test]
    fn out_of_range_cells_are_an_error() {
        let mut sheet = SpreadSheet::new(3, 3, CellContextFactory::default());
        assert_eq!(
            sheet.set_content(3, 0, "x"),
            Err(CellError::OutOfRange {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3,
            })
        );
        assert!(sheet.context_at(0, 9).is_err());
    }

    #[test]
    fn render_shows_content_and_font() {
        let mut sheet = SpreadSheet::new(2, 1, CellContextFactory::default());
        sheet.set_content(0, 0, "Hello").unwrap();
        let lines = sheet.render();
        assert_eq!(lines[0], "(0, 0): Hello [Times New Roman]");
    }
}
