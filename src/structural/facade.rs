//! Facade: one call on the facade performs the whole subsystem sequence.
//! The subsystem types stay public; the facade just saves clients from
//! having to drive them in the right order.

// =============================================================================
// Notification subsystem
// =============================================================================

pub struct Connection {
    pub ip: String,
}

impl Connection {
    pub fn disconnect(&self) -> String {
        format!("disconnected from {}", self.ip)
    }
}

pub struct AuthToken(pub String);

pub struct Message {
    pub content: String,
}

pub struct NotificationServer;

impl NotificationServer {
    pub fn connect(&self, ip: &str) -> Connection {
        Connection { ip: ip.to_string() }
    }

    pub fn authenticate(&self, app_id: &str, key: &str) -> AuthToken {
        AuthToken(format!("token({app_id}/{key})"))
    }

    pub fn send(&self, token: &AuthToken, message: &Message, target: &str) -> String {
        format!("sent '{}' to {} with {}", message.content, target, token.0)
    }
}

/// The facade. Connect, authenticate, send, disconnect, in one call.
pub struct NotificationService;

impl NotificationService {
    pub fn send(&self, message: &str, target: &str) -> Vec<String> {
        let server = NotificationServer;
        let connection = server.connect("192.168.1.1");
        let token = server.authenticate("app-id", "key");
        let sent = server.send(
            &token,
            &Message {
                content: message.to_string(),
            },
            target,
        );
        vec![sent, connection.disconnect()]
    }
}

// =============================================================================
// Tweets subsystem
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub text: String,
}

pub struct OAuth;

impl OAuth {
    pub fn request_token(&self, app_key: &str, _secret: &str) -> String {
        format!("request-token({app_key})")
    }

    pub fn access_token(&self, request_token: &str) -> String {
        format!("access-token({request_token})")
    }
}

pub struct TwitterClient;

impl TwitterClient {
    pub fn recent_tweets(&self, access_token: &str) -> Vec<Tweet> {
        vec![
            Tweet {
                text: format!("fetched with {access_token}"),
            },
            Tweet {
                text: "hello".to_string(),
            },
        ]
    }
}

/// Facade over the token dance.
pub struct TwitterApi {
    app_key: String,
    secret: String,
}

impl TwitterApi {
    pub fn new(app_key: impl Into<String>, secret: impl Into<String>) -> Self {
        TwitterApi {
            app_key: app_key.into(),
            secret: secret.into(),
        }
    }

    pub fn recent_tweets(&self) -> Vec<Tweet> {
        let oauth = OAuth;
        let request_token = oauth.request_token(&self.app_key, &self.secret);
        let access_token = oauth.access_token(&request_token);
        TwitterClient.recent_tweets(&access_token)
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Facade");

    for line in NotificationService.send("hello", "target-device") {
        println!("{line}");
    }

    let api = TwitterApi::new("app-key", "secret");
    for tweet in api.recent_tweets() {
        println!("tweet: {}", tweet.text);
    }
}
