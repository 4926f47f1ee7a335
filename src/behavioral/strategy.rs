//! Strategy: pass the algorithm in as a parameter instead of hard-wiring
//! it. The image storage takes any compressor and filter; the chat client
//! takes any encryption algorithm.

// =============================================================================
// Image storage with compressor and filter strategies
// =============================================================================

pub trait Compressor {
    fn compress(&self, file_name: &str) -> String;
}

pub trait ImageFilter {
    fn apply(&self, file_name: &str) -> String;
}

pub struct Jpeg;

impl Compressor for Jpeg {
    fn compress(&self, file_name: &str) -> String {
        format!("{file_name}.jpeg")
    }
}

pub struct Png;

impl Compressor for Png {
    fn compress(&self, file_name: &str) -> String {
        format!("{file_name}.png")
    }
}

pub struct BlackAndWhite;

impl ImageFilter for BlackAndWhite {
    fn apply(&self, file_name: &str) -> String {
        format!("{file_name} (b&w)")
    }
}

pub struct ImageStorage;

impl ImageStorage {
    /// Compresses, then filters, and reports the stored artifact.
    pub fn store(
        &self,
        file_name: &str,
        compressor: &dyn Compressor,
        filter: &dyn ImageFilter,
    ) -> String {
        let compressed = compressor.compress(file_name);
        filter.apply(&compressed)
    }
}

// =============================================================================
// Chat client with an encryption strategy
// =============================================================================

pub trait EncryptionAlgorithm {
    fn name(&self) -> &str;
    fn encrypt(&self, text: &str) -> String;
}

/// Toy ciphers: enough to make the strategy's effect visible, nothing more.
pub struct Des;

impl EncryptionAlgorithm for Des {
    fn name(&self) -> &str {
        "DES"
    }

    fn encrypt(&self, text: &str) -> String {
        text.chars().rev().collect()
    }
}

pub struct Aes;

impl EncryptionAlgorithm for Aes {
    fn name(&self) -> &str {
        "AES"
    }

    fn encrypt(&self, text: &str) -> String {
        text.bytes().map(|b| format!("{b:02x}")).collect()
    }
}

pub struct ChatClient;

impl ChatClient {
    pub fn send(&self, message: &str, algorithm: &dyn EncryptionAlgorithm) -> String {
        let encrypted = algorithm.encrypt(message);
        format!("sending {encrypted} ({} encrypted)", algorithm.name())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Strategy");

    let storage = ImageStorage;
    println!("{}", storage.store("a", &Jpeg, &BlackAndWhite));
    println!("{}", storage.store("b", &Png, &BlackAndWhite));

    let client = ChatClient;
    println!("{}", client.send("message", &Des));
    println!("{}", client.send("message", &Aes));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_applies_compressor_then_filter() {
        let storage = ImageStorage;
        assert_eq!(storage.store("a", &Jpeg, &BlackAndWhite), "a.jpeg (b&w)");
        assert_eq!(storage.store("b", &Png, &BlackAndWhite), "b.png (b&w)");
    }

    #[test]
    fn chat_client_uses_the_supplied_algorithm() {
        let client = ChatClient;
        assert_eq!(client.send("abc", &Des), "sending cba (DES encrypted)");
        assert_eq!(client.send("abc", &Aes), "sending 616263 (AES encrypted)");
    }
}
