//! Chain of Responsibility: pass a request along a chain of handlers until
//! one of them consumes it.
//!
//! Two scenarios: a web-server middleware chain where a failed check stops
//! the request, and a file-reader chain that dispatches on the file
//! extension and errors when no reader matches.

use thiserror::Error;

// =============================================================================
// Middleware chain: authenticator -> logger -> compressor
// =============================================================================

pub struct HttpRequest {
    pub username: String,
    pub password: String,
}

impl HttpRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        HttpRequest {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A single link in the middleware chain. `process` returns `Consumed` to
/// stop propagation, `Continue` to hand the request to the next link.
pub trait Middleware {
    fn name(&self) -> &str;
    fn process(&self, request: &HttpRequest) -> Outcome;
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Consumed,
}

pub struct Authenticator;

impl Middleware for Authenticator {
    fn name(&self) -> &str {
        "authenticator"
    }

    fn process(&self, request: &HttpRequest) -> Outcome {
        if request.username == "admin" && request.password == "1234" {
            Outcome::Continue
        } else {
            Outcome::Consumed
        }
    }
}

pub struct RequestLogger;

impl Middleware for RequestLogger {
    fn name(&self) -> &str {
        "logger"
    }

    fn process(&self, _request: &HttpRequest) -> Outcome {
        Outcome::Continue
    }
}

pub struct Compressor;

impl Middleware for Compressor {
    fn name(&self) -> &str {
        "compressor"
    }

    fn process(&self, _request: &HttpRequest) -> Outcome {
        Outcome::Continue
    }
}

pub struct WebServer {
    head: Vec<Box<dyn Middleware>>,
}

impl WebServer {
    pub fn new(chain: Vec<Box<dyn Middleware>>) -> Self {
        WebServer { head: chain }
    }

    /// Runs the request through the chain and returns the names of the
    /// links that saw it, in order.
    pub fn handle(&self, request: &HttpRequest) -> Vec<String> {
        let mut visited = Vec::new();
        for middleware in &self.head {
            visited.push(middleware.name().to_string());
            if middleware.process(request) == Outcome::Consumed {
                break;
            }
        }
        visited
    }
}

// =============================================================================
// Reader chain: dispatch on file extension, linked handler to handler
// =============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReadError {
    #[error("file format of '{file_name}' is not supported")]
    UnsupportedFormat { file_name: String },
}

/// A reader handles files with its extension and forwards everything else
/// to the next reader in the chain.
pub trait DataReader {
    fn extension(&self) -> &str;
    fn describe(&self) -> &str;

    fn read(&self, file_name: &str) -> Result<String, ReadError>;
}

fn read_or_forward(
    reader: &dyn DataReader,
    next: Option<&dyn DataReader>,
    file_name: &str,
) -> Result<String, ReadError> {
    if file_name.ends_with(reader.extension()) {
        return Ok(format!("{} ({file_name})", reader.describe()));
    }
    match next {
        Some(next) => next.read(file_name),
        None => Err(ReadError::UnsupportedFormat {
            file_name: file_name.to_string(),
        }),
    }
}

pub struct QuickBooksReader {
    next: Option<Box<dyn DataReader>>,
}

impl QuickBooksReader {
    pub fn new(next: Option<Box<dyn DataReader>>) -> Self {
        QuickBooksReader { next }
    }
}

impl DataReader for QuickBooksReader {
    fn extension(&self) -> &str {
        ".qbw"
    }

    fn describe(&self) -> &str {
        "reading a QuickBooks file"
    }

    fn read(&self, file_name: &str) -> Result<String, ReadError> {
        read_or_forward(self, self.next.as_deref(), file_name)
    }
}

pub struct NumbersReader {
    next: Option<Box<dyn DataReader>>,
}

impl NumbersReader {
    pub fn new(next: Option<Box<dyn DataReader>>) -> Self {
        NumbersReader { next }
    }
}

impl DataReader for NumbersReader {
    fn extension(&self) -> &str {
        ".numbers"
    }

    fn describe(&self) -> &str {
        "reading a Numbers spreadsheet"
    }

    fn read(&self, file_name: &str) -> Result<String, ReadError> {
        read_or_forward(self, self.next.as_deref(), file_name)
    }
}

pub struct ExcelReader {
    next: Option<Box<dyn DataReader>>,
}

impl ExcelReader {
    pub fn new(next: Option<Box<dyn DataReader>>) -> Self {
        ExcelReader { next }
    }
}

impl DataReader for ExcelReader {
    fn extension(&self) -> &str {
        ".xls"
    }

    fn describe(&self) -> &str {
        "reading an Excel spreadsheet"
    }

    fn read(&self, file_name: &str) -> Result<String, ReadError> {
        read_or_forward(self, self.next.as_deref(), file_name)
    }
}

/// The stock reader chain: QuickBooks -> Numbers -> Excel, most specific
/// format first.
pub fn reader_chain() -> Box<dyn DataReader> {
    let excel = ExcelReader::new(None);
    let numbers = NumbersReader::new(Some(Box::new(excel)));
    Box::new(QuickBooksReader::new(Some(Box::new(numbers))))
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Chain of Responsibility");

    let server = WebServer::new(vec![
        Box::new(Authenticator),
        Box::new(RequestLogger),
        Box::new(Compressor),
    ]);
    let good = server.handle(&HttpRequest::new("admin", "1234"));
    println!("admin/1234 passed through: {}", good.join(" -> "));
    let bad = server.handle(&HttpRequest::new("admin", "wrong"));
    println!("admin/wrong stopped at:    {}", bad.join(" -> "));

    let reader = reader_chain();
    for file in ["data.xls", "data.numbers", "data.qbw", "data.jpg"] {
        match reader.read(file) {
            Ok(result) => println!("{result}"),
            Err(err) => println!("{err}"),
        }
    }
}
