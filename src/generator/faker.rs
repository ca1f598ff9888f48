use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;

/// Supplier of synthetic user identities and message text.
pub trait FakeSource: Send + Sync {
    fn email(&self) -> String;

    /// A sentence of exactly `words` words.
    fn sentence(&self, words: usize) -> String;
}

/// `FakeSource` backed by the `fake` crate's English lorem/internet data.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremFaker;

impl FakeSource for LoremFaker {
    fn email(&self) -> String {
        SafeEmail().fake()
    }

    fn sentence(&self, words: usize) -> String {
        Sentence(words..words + 1).fake()
    }
}
