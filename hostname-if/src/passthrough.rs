use crate::address::AddressClassifier;
use crate::inet::FamilyState;
use crate::keyword::DynamicKeyword;

/// Lenient formatter used for the second pass over addresses and for raw
/// values.
///
/// Keywords, `up`/`down` and `!` commands are emitted as written, without
/// any version resolution. Addresses are formatted like [`crate::InetFormatter`]
/// does. Anything else is passed through verbatim.
pub struct PassthroughFormatter<'a> {
    classifier: &'a dyn AddressClassifier,
}

impl<'a> PassthroughFormatter<'a> {
    pub fn new(classifier: &'a dyn AddressClassifier) -> Self {
        Self { classifier }
    }

    pub fn format(&self, items: &[String]) -> Vec<String> {
        let mut state = FamilyState::default();

        items
            .iter()
            .map(|item| {
                if is_verbatim_directive(item) {
                    return item.clone();
                }
                match self.classifier.classify(item) {
                    Some(address) => state.format(&address),
                    None => {
                        tracing::trace!(item = %item, "passing raw item through");
                        item.clone()
                    }
                }
            })
            .collect()
    }
}

fn is_verbatim_directive(item: &str) -> bool {
    DynamicKeyword::parse(item).is_some()
        || item == "up"
        || item == "down"
        || item.starts_with('!')
}
