//! Rule-based shopping assistant.
//!
//! The responder is a pure function over an ordered keyword table; the widget
//! keeps the visible transcript and simulates "typing" with a fixed delay
//! before each reply. There is no conversation state beyond the transcript.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Greeting seeded into every transcript.
const GREETING: &str = "Hi! I'm your NextGen shopping assistant. How can I help you today?";

/// Reply used when no keyword matches.
const FALLBACK_REPLY: &str = "Thanks for your message! I'm here to help with any questions about \
                              our products, shipping, returns, or account issues. What would you \
                              like to know?";

/// Ordered keyword table; the first row with a matching keyword wins.
const RESPONSES: &[(&[&str], &str)] = &[
    (
        &["product", "item"],
        "I can help you find products! We have accessories, NFTs, and wear. What are you looking \
         for specifically?",
    ),
    (
        &["shipping", "delivery"],
        "We offer free shipping on all orders! Standard delivery takes 3-5 business days, and \
         express delivery is available for faster shipping.",
    ),
    (
        &["return", "refund"],
        "We have a 30-day return policy. You can return any item in its original condition for a \
         full refund. Would you like help with a return?",
    ),
    (
        &["nft"],
        "Our NFT collection features unique digital art, gaming assets, and collectibles. Each \
         NFT comes with proof of ownership and authenticity. Would you like to browse our NFT \
         category?",
    ),
    (
        &["price", "cost"],
        "Our products range from affordable accessories to premium NFTs. You can filter by price \
         range on our products page. What's your budget?",
    ),
    (
        &["help", "support"],
        "I'm here to help! You can ask me about products, shipping, returns, or anything else. \
         What do you need assistance with?",
    ),
];

/// Pick the canned reply for a user utterance.
///
/// Matching is case-insensitive substring search, first table row wins.
#[must_use]
pub fn respond(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    RESPONSES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(FALLBACK_REPLY, |&(_, reply)| reply)
}

/// Who said a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the visible transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// The chat widget: transcript plus the typing delay applied before replies.
#[derive(Debug)]
pub struct ChatWidget {
    messages: Vec<ChatMessage>,
    typing_delay: Duration,
    next_id: u64,
}

impl ChatWidget {
    /// Create a widget with the greeting already in the transcript.
    #[must_use]
    pub fn new(typing_delay: Duration) -> Self {
        let mut widget = Self {
            messages: Vec::new(),
            typing_delay,
            next_id: 1,
        };
        widget.push(Sender::Assistant, GREETING.to_owned());
        widget
    }

    /// The transcript in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message, wait out the typing delay, and append the
    /// assistant's reply. Blank input is ignored and yields `None`.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.push(Sender::User, text.to_owned());
        let reply = respond(text);

        tokio::time::sleep(self.typing_delay).await;
        self.push(Sender::Assistant, reply.to_owned());
        self.messages.last()
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert!(respond("Do you have any PRODUCTS?").contains("accessories, NFTs, and wear"));
        assert!(respond("when is my delivery arriving").contains("free shipping"));
        assert!(respond("I want a refund").contains("30-day return policy"));
        assert!(respond("what is an nft").contains("NFT collection"));
        assert!(respond("how much does it cost").contains("filter by price"));
        assert!(respond("I need support").contains("here to help"));
    }

    #[test]
    fn test_first_match_wins() {
        // "product" appears before "price" in the table.
        let reply = respond("what's the price of this product");
        assert!(reply.contains("What are you looking"));
    }

    #[test]
    fn test_fallback_reply() {
        assert_eq!(respond("tell me a joke"), FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_transcript_starts_with_greeting() {
        let widget = ChatWidget::new(Duration::ZERO);
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].sender, Sender::Assistant);
        assert_eq!(widget.messages()[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_send_appends_user_and_reply() {
        let mut widget = ChatWidget::new(Duration::ZERO);
        let reply = widget.send("shipping?").await.unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(reply.text.contains("free shipping"));

        assert_eq!(widget.messages().len(), 3);
        assert_eq!(widget.messages()[1].sender, Sender::User);

        let ids: Vec<u64> = widget.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let mut widget = ChatWidget::new(Duration::ZERO);
        assert!(widget.send("   ").await.is_none());
        assert_eq!(widget.messages().len(), 1);
    }
}
