//! Gateway callback decoding.

use std::collections::BTreeMap;

/// Callback parameters as received and after best-effort decryption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayCallback {
    pub raw: BTreeMap<String, String>,
    pub decrypted: BTreeMap<String, String>,
}

impl GatewayCallback {
    /// Decode each parameter independently.
    ///
    /// A value that `decrypt` rejects is kept as received. When a key repeats,
    /// the last occurrence wins.
    pub fn decode<I, F>(params: I, decrypt: F) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
        F: Fn(&str) -> Option<String>,
    {
        let mut callback = Self::default();
        for (key, value) in params {
            let decoded = decrypt(&value).unwrap_or_else(|| value.clone());
            callback.decrypted.insert(key.clone(), decoded);
            callback.raw.insert(key, value);
        }
        callback
    }

    /// Keys whose values could not be decrypted.
    pub fn undecrypted_keys(&self) -> impl Iterator<Item = &str> {
        self.raw
            .iter()
            .filter(|(key, value)| self.decrypted.get(*key) == Some(*value))
            .map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_decrypt(value: &str) -> Option<String> {
        value.strip_prefix("enc:").map(str::to_string)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn decrypts_values_that_decrypt() {
        let callback = GatewayCallback::decode(pairs(&[("amount", "enc:500")]), fake_decrypt);
        assert_eq!(callback.raw["amount"], "enc:500");
        assert_eq!(callback.decrypted["amount"], "500");
    }

    #[test]
    fn falls_back_to_raw_value() {
        let callback = GatewayCallback::decode(pairs(&[("status", "SUCCESS")]), fake_decrypt);
        assert_eq!(callback.decrypted["status"], "SUCCESS");
        assert_eq!(callback.undecrypted_keys().collect::<Vec<_>>(), vec!["status"]);
    }

    #[test]
    fn last_duplicate_wins() {
        let callback = GatewayCallback::decode(
            pairs(&[("status", "PENDING"), ("status", "SUCCESS")]),
            fake_decrypt,
        );
        assert_eq!(callback.raw.len(), 1);
        assert_eq!(callback.raw["status"], "SUCCESS");
    }

    #[test]
    fn empty_params_give_empty_maps() {
        let callback = GatewayCallback::decode(Vec::new(), fake_decrypt);
        assert!(callback.raw.is_empty());
        assert!(callback.decrypted.is_empty());
    }
}
