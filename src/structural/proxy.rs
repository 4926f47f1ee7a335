//! Proxy: a stand-in that controls access to the real object. The ebook
//! proxy defers the expensive file load until the first show; the product
//! proxy tracks edits so the context can flush them on save.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EbookError {
    #[error("failed to load ebook '{file_name}': {source}")]
    Load {
        file_name: String,
        source: io::Error,
    },
    #[error("no ebook named '{file_name}' in the library")]
    NotInLibrary { file_name: String },
}

// =============================================================================
// Lazy-loading ebooks
// =============================================================================

pub trait Ebook {
    fn file_name(&self) -> &str;
    fn show(&self) -> Result<String, EbookError>;
}

/// The real subject. Construction reads the whole file, which is the
/// expensive part the proxy exists to defer.
pub struct RealEbook {
    file_name: String,
    content: String,
}

impl RealEbook {
    pub fn load(path: &Path) -> Result<Self, EbookError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let content = fs::read_to_string(path).map_err(|source| EbookError::Load {
            file_name: file_name.clone(),
            source,
        })?;
        Ok(RealEbook { file_name, content })
    }
}

impl Ebook for RealEbook {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn show(&self) -> Result<String, EbookError> {
        Ok(format!("showing {}: {}", self.file_name, self.content))
    }
}

/// Virtual proxy: holds only the path until somebody actually opens the
/// book.
pub struct LazyEbook {
    path: PathBuf,
    file_name: String,
    loaded: RefCell<Option<RealEbook>>,
    loads: Cell<usize>,
}

impl LazyEbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        LazyEbook {
            path,
            file_name,
            loaded: RefCell::new(None),
            loads: Cell::new(0),
        }
    }

    /// How many times the real ebook was loaded. At most one after any
    /// number of shows.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl Ebook for LazyEbook {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn show(&self) -> Result<String, EbookError> {
        if self.loaded.borrow().is_none() {
            let real = RealEbook::load(&self.path)?;
            self.loads.set(self.loads.get() + 1);
            *self.loaded.borrow_mut() = Some(real);
        }
        self.loaded
            .borrow()
            .as_ref()
            .expect("just loaded")
            .show()
    }
}

/// Logging proxy: records every access, then delegates.
pub struct LoggingEbook {
    inner: Box<dyn Ebook>,
    accesses: RefCell<Vec<String>>,
}

impl LoggingEbook {
    pub fn new(inner: Box<dyn Ebook>) -> Self {
        LoggingEbook {
            inner,
            accesses: RefCell::new(Vec::new()),
        }
    }

    pub fn accesses(&self) -> Vec<String> {
        self.accesses.borrow().clone()
    }
}

impl Ebook for LoggingEbook {
    fn file_name(&self) -> &str {
        self.inner.file_name()
    }

    fn show(&self) -> Result<String, EbookError> {
        self.accesses
            .borrow_mut()
            .push(self.inner.file_name().to_string());
        self.inner.show()
    }
}

#[derive(Default)]
pub struct Library {
    ebooks: HashMap<String, Box<dyn Ebook>>,
}

impl Library {
    pub fn add(&mut self, ebook: Box<dyn Ebook>) {
        self.ebooks.insert(ebook.file_name().to_string(), ebook);
    }

    pub fn open(&self, file_name: &str) -> Result<String, EbookError> {
        let ebook = self
            .ebooks
            .get(file_name)
            .ok_or_else(|| EbookError::NotInLibrary {
                file_name: file_name.to_string(),
            })?;
        ebook.show()
    }
}

// =============================================================================
// Change-tracking products
// =============================================================================

type DirtySet = Rc<RefCell<HashMap<u32, String>>>;

/// Protection-style proxy around a product row: edits go through and are
/// recorded in the owning context's dirty set.
pub struct ProductProxy {
    id: u32,
    name: RefCell<String>,
    dirty: DirtySet,
}

impl ProductProxy {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: &str) {
        *self.name.borrow_mut() = name.to_string();
        self.dirty.borrow_mut().insert(self.id, name.to_string());
    }
}

#[derive(Default)]
pub struct DbContext {
    dirty: DirtySet,
}

impl DbContext {
    pub fn product(&self, id: u32) -> ProductProxy {
        ProductProxy {
            id,
            name: RefCell::new(format!("Product {id}")),
            dirty: Rc::clone(&self.dirty),
        }
    }

    /// Flushes tracked edits as UPDATE statements and clears the dirty
    /// set.
    pub fn save_changes(&self) -> Vec<String> {
        let mut statements: Vec<String> = self
            .dirty
            .borrow()
            .iter()
            .map(|(id, name)| {
                format!("UPDATE products SET name = '{name}' WHERE product_id = {id}")
            })
            .collect();
        statements.sort();
        self.dirty.borrow_mut().clear();
        statements
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Proxy");

    // In-memory stand-in: the tests exercise the real file path.
    struct CannedEbook(&'static str);
    impl Ebook for CannedEbook {
        fn file_name(&self) -> &str {
            self.0
        }
        fn show(&self) -> Result<String, EbookError> {
            Ok(format!("showing {}", self.0))
        }
    }

    let mut library = Library::default();
    for name in ["a", "b", "c"] {
        library.add(Box::new(LoggingEbook::new(Box::new(CannedEbook(name)))));
    }
    match library.open("a") {
        Ok(line) => println!("{line}"),
        Err(err) => println!("{err}"),
    }
    if let Err(err) = library.open("z") {
        println!("{err}");
    }

    let context = DbContext::default();
    let product = context.product(1);
    product.set_name("Updated Name");
    for statement in context.save_changes() {
        println!("{statement}");
    }
    product.set_name("Another Name");
    for statement in context.save_changes() {
        println!("{statement}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ebook_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn lazy_ebook_loads_once_and_only_on_first_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = ebook_file(&dir, "moby.txt", "Call me Ishmael.");
        let ebook = LazyEbook::new(path);

        assert_eq!(ebook.load_count(), 0);
        let first = ebook.show().unwrap();
        let second = ebook.show().unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Call me Ishmael."));
        assert_eq!(ebook.load_count(), 1);
    }

    #[test]
    fn unopened_ebooks_are_never_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let opened = LazyEbook::new(ebook_file(&dir, "a.txt", "A"));
        let untouched = LazyEbook::new(ebook_file(&dir, "b.txt", "B"));

        opened.show().unwrap();
        assert_eq!(opened.load_count(), 1);
        assert_eq!(untouched.load_count(), 0);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let ebook = LazyEbook::new("/no/such/file.txt");
        let err = ebook.show().unwrap_err();
        assert!(matches!(err, EbookError::Load { .. }));
    }

    #[test]
    fn logging_proxy_records_every_access() {
        let dir = tempfile::tempdir().unwrap();
        let path = ebook_file(&dir, "a.txt", "A");
        let logged = LoggingEbook::new(Box::new(LazyEbook::new(path)));

        logged.show().unwrap();
        logged.show().unwrap();
        assert_eq!(logged.accesses(), ["a.txt", "a.txt"]);
    }

    #[test]
    fn library_open_errors_on_unknown_names() {
        let library = Library::default();
        assert!(matches!(
            library.open("missing"),
            Err(EbookError::NotInLibrary { .. })
        ));
    }

    #[test]
    fn edits_are_flushed_once_per_save() {
        let context = DbContext::default();
        let product = context.product(1);

        product.set_name("Updated Name");
        assert_eq!(
            context.save_changes(),
            ["UPDATE products SET name = 'Updated Name' WHERE product_id = 1"]
        );
        // Nothing dirty until the next edit.
        assert!(context.save_changes().is_empty());

        product.set_name("Another Name");
        assert_eq!(
            context.save_changes(),
            ["UPDATE products SET name = 'Another Name' WHERE product_id = 1"]
        );
    }

    #[test]
    fn several_products_flush_together() {
        let context = DbContext::default();
        context.product(2).set_name("B");
        context.product(1).set_name("A");
        let statements = context.save_changes();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("product_id = 1"));
        assert!(statements[1].contains("product_id = 2"));
    }
}
