//! Adapter: make a third-party API fit the interface the rest of the code
//! expects. The third-party types here are deliberately incompatible with
//! our traits; the adapters own them and translate.

// =============================================================================
// Photo filters: adapting a third-party renderer
// =============================================================================

pub struct Image {
    pub name: String,
}

pub trait PhotoFilter {
    fn apply(&self, image: &Image) -> String;
}

pub struct VividFilter;

impl PhotoFilter for VividFilter {
    fn apply(&self, image: &Image) -> String {
        format!("applying vivid filter to {}", image.name)
    }
}

/// Third-party filter library. Its API (init + render) doesn't match
/// [`PhotoFilter`].
pub mod third_party {
    use super::Image;

    #[derive(Default)]
    pub struct Caramel {
        initialized: bool,
    }

    impl Caramel {
        pub fn init(&mut self) {
            self.initialized = true;
        }

        pub fn render(&self, image: &Image) -> String {
            assert!(self.initialized, "Caramel::init must be called first");
            format!("applying caramel filter to {}", image.name)
        }
    }

    pub struct GmailClient;

    impl GmailClient {
        pub fn connect(&self) -> String {
            "connecting to gmail".to_string()
        }

        pub fn get_emails(&self) -> String {
            "downloading emails from gmail".to_string()
        }

        pub fn disconnect(&self) -> String {
            "disconnecting from gmail".to_string()
        }
    }
}

/// Adapter: owns the adaptee and drives its init/render protocol behind the
/// filter trait.
pub struct CaramelFilter {
    caramel: third_party::Caramel,
}

impl CaramelFilter {
    pub fn new(mut caramel: third_party::Caramel) -> Self {
        caramel.init();
        CaramelFilter { caramel }
    }
}

impl PhotoFilter for CaramelFilter {
    fn apply(&self, image: &Image) -> String {
        self.caramel.render(image)
    }
}

pub struct ImageView {
    image: Image,
}

impl ImageView {
    pub fn new(image: Image) -> Self {
        ImageView { image }
    }

    pub fn apply(&self, filter: &dyn PhotoFilter) -> String {
        filter.apply(&self.image)
    }
}

// =============================================================================
// Email providers: adapting a third-party client
// =============================================================================

pub trait EmailProvider {
    fn download_emails(&self) -> Vec<String>;
}

pub struct GmailAdapter {
    client: third_party::GmailClient,
}

impl GmailAdapter {
    pub fn new(client: third_party::GmailClient) -> Self {
        GmailAdapter { client }
    }
}

impl EmailProvider for GmailAdapter {
    fn download_emails(&self) -> Vec<String> {
        vec![
            self.client.connect(),
            self.client.get_emails(),
            self.client.disconnect(),
        ]
    }
}

#[derive(Default)]
pub struct EmailClient {
    providers: Vec<Box<dyn EmailProvider>>,
}

impl EmailClient {
    pub fn add_provider(&mut self, provider: Box<dyn EmailProvider>) {
        self.providers.push(provider);
    }

    pub fn download_emails(&self) -> Vec<String> {
        self.providers
            .iter()
            .flat_map(|provider| provider.download_emails())
            .collect()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Adapter");

    let view = ImageView::new(Image {
        name: "portrait.raw".to_string(),
    });
    println!("{}", view.apply(&VividFilter));
    println!(
        "{}",
        view.apply(&CaramelFilter::new(third_party::Caramel::default()))
    );

    let mut client = EmailClient::default();
    client.add_provider(Box::new(GmailAdapter::new(third_party::GmailClient)));
    for line in client.download_emails() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_satisfies_the_filter_trait() {
        let view = ImageView::new(Image {
            name: "a.raw".to_string(),
        });
        let caramel = CaramelFilter::new(third_party::Caramel::default());
        assert_eq!(view.apply(&caramel), "applying caramel filter to a.raw");
    }

    #[test]
    fn native_filters_work_unchanged() {
        let view = ImageView::new(Image {
            name: "a.raw".to_string(),
        });
        assert_eq!(view.apply(&VividFilter), "applying vivid filter to a.raw");
    }

    #[test]
    fn gmail_adapter_runs_the_full_protocol() {
        let adapter = GmailAdapter::new(third_party::GmailClient);
        assert_eq!(
            adapter.download_emails(),
            [
                "connecting to gmail",
                "downloading emails from gmail",
                "disconnecting from gmail",
            ]
        );
    }
}
