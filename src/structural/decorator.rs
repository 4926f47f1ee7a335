//! Decorator: wrap an object in layers that each transform the data before
//! delegating inward. The write path returns the payload the innermost
//! store actually received, so the stacking order is observable.

// =============================================================================
// Storage streams
// =============================================================================

pub trait Stream {
    /// Writes the data and returns what was ultimately stored.
    fn write(&self, data: &str) -> String;
}

pub struct CloudStore;

impl Stream for CloudStore {
    fn write(&self, data: &str) -> String {
        data.to_string()
    }
}

/// Reverses the payload. A stand-in cipher: deterministic and visibly
/// different from the plaintext.
pub struct Encrypted {
    inner: Box<dyn Stream>,
}

impl Encrypted {
    pub fn new(inner: Box<dyn Stream>) -> Self {
        Encrypted { inner }
    }

    fn encrypt(data: &str) -> String {
        data.chars().rev().collect()
    }
}

impl Stream for Encrypted {
    fn write(&self, data: &str) -> String {
        self.inner.write(&Self::encrypt(data))
    }
}

/// Toy compressor: keeps the first four characters.
pub struct Compressed {
    inner: Box<dyn Stream>,
}

impl Compressed {
    pub fn new(inner: Box<dyn Stream>) -> Self {
        Compressed { inner }
    }

    fn compress(data: &str) -> String {
        data.chars().take(4).collect()
    }
}

impl Stream for Compressed {
    fn write(&self, data: &str) -> String {
        self.inner.write(&Self::compress(data))
    }
}

// =============================================================================
// Editor artifacts with badge decorators
// =============================================================================

pub trait Artifact {
    fn render(&self) -> String;
}

pub struct SourceFile {
    name: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        SourceFile { name: name.into() }
    }
}

impl Artifact for SourceFile {
    fn render(&self) -> String {
        self.name.clone()
    }
}

pub struct EntryPointBadge {
    inner: Box<dyn Artifact>,
}

impl EntryPointBadge {
    pub fn new(inner: Box<dyn Artifact>) -> Self {
        EntryPointBadge { inner }
    }
}

impl Artifact for EntryPointBadge {
    fn render(&self) -> String {
        format!("{} [main]", self.inner.render())
    }
}

pub struct ErrorBadge {
    inner: Box<dyn Artifact>,
}

impl ErrorBadge {
    pub fn new(inner: Box<dyn Artifact>) -> Self {
        ErrorBadge { inner }
    }
}

impl Artifact for ErrorBadge {
    fn render(&self) -> String {
        format!("{} [error]", self.inner.render())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Decorator");

    let data = "1234-1234-1234-1234";
    let plain = CloudStore;
    println!("stored plain:            {}", plain.write(data));

    let encrypted = Encrypted::new(Box::new(CloudStore));
    println!("stored encrypted:        {}", encrypted.write(data));

    let compressed = Compressed::new(Box::new(CloudStore));
    println!("stored compressed:       {}", compressed.write(data));

    let both = Encrypted::new(Box::new(Compressed::new(Box::new(CloudStore))));
    println!("encrypted then compressed: {}", both.write(data));

    let artifacts: Vec<Box<dyn Artifact>> = vec![
        Box::new(ErrorBadge::new(Box::new(EntryPointBadge::new(Box::new(
            SourceFile::new("Main"),
        ))))),
        Box::new(SourceFile::new("Demo")),
        Box::new(ErrorBadge::new(Box::new(SourceFile::new("EmailClient")))),
    ];
    for artifact in &artifacts {
        println!("{}", artifact.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecorated_store_keeps_the_payload() {
        assert_eq!(CloudStore.write("abcd"), "abcd");
    }

    #[test]
    fn each_decorator_transforms_before_delegating() {
        let encrypted = Encrypted::new(Box::new(CloudStore));
        assert_eq!(encrypted.write("abcd"), "dcba");

        let compressed = Compressed::new(Box::new(CloudStore));
        assert_eq!(compressed.write("abcdef"), "abcd");
    }

    #[test]
    fn stacking_order_is_observable() {
        // encrypt first: reverse "abcdef" -> "fedcba", then keep 4 -> "fedc"
        let encrypt_outside = Compressed::new(Box::new(CloudStore));
        let encrypt_outside = Encrypted::new(Box::new(encrypt_outside));
        assert_eq!(encrypt_outside.write("abcdef"), "fedc");

        // compress first: keep 4 "abcd", then reverse -> "dcba"
        let compress_outside = Encrypted::new(Box::new(CloudStore));
        let compress_outside = Compressed::new(Box::new(compress_outside));
        assert_eq!(compress_outside.write("abcdef"), "dcba");
    }

    #[test]
    fn badges_stack_on_artifacts() {
        let decorated = ErrorBadge::new(Box::new(EntryPointBadge::new(Box::new(
            SourceFile::new("Main"),
        ))));
        assert_eq!(decorated.render(), "Main [main] [error]");
    }
}
