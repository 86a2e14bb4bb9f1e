//! Customer verification state.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use products::{Product, VerifyPolicy};

/// Payload the "scan demo" button verifies.
pub const DEMO_QR_CODE: &str = "QUdSLTg4NGY0Y2N8T3JnYW5pYyBBcHBsZXN8Q2FsaWZvcm5pYSBGYXJtfDE3MzE2MTQ5ODA4OQ==";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a QR code value";

pub fn decode_failed_message(reason: &str) -> String {
    format!("Could not decode QR code: {reason}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerState {
    pub manual_code: String,
    pub policy: VerifyPolicy,
    /// A decode or verification is outstanding; scan/verify triggers are disabled.
    pub loading: bool,
    pub verified: Option<Product>,
    pub error: Option<String>,
}

impl CustomerState {
    /// Start verifying `code`.
    ///
    /// Returns the trimmed code to send, or `None` when a request is already
    /// outstanding or the code is blank (which records an input error).
    pub fn begin_verify(&mut self, code: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        let code = code.trim();
        if code.is_empty() {
            self.fail(EMPTY_INPUT_MESSAGE.to_owned());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(code.to_owned())
    }

    /// Verify the demo payload and show it in the manual input.
    pub fn demo_scan(&mut self) -> Option<String> {
        let code = self.begin_verify(DEMO_QR_CODE)?;
        self.manual_code.clone_from(&code);
        Some(code)
    }

    pub fn submit_manual(&mut self) -> Option<String> {
        let code = self.manual_code.clone();
        self.begin_verify(&code)
    }

    /// Mark an image upload as in progress. Returns `false` when busy.
    pub fn begin_upload(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Continue an upload whose image decoded to `code`.
    pub fn decoded(&mut self, code: &str) -> Option<String> {
        let code = code.trim();
        if code.is_empty() {
            self.decode_failed("empty payload");
            return None;
        }
        self.manual_code = code.to_owned();
        Some(code.to_owned())
    }

    pub fn decode_failed(&mut self, reason: &str) {
        self.fail(decode_failed_message(reason));
    }

    pub fn finish_verify(&mut self, result: Result<Product, String>) {
        match result {
            Ok(product) => {
                self.loading = false;
                self.verified = Some(product);
                self.error = None;
            }
            Err(message) => self.fail(message),
        }
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.verified = None;
        self.error = Some(message);
    }
}
