wire_record! {
    /// Telegram Passport data shared with the bot.
    pub struct PassportData {
        pub data: Vec<EncryptedPassportElement>,
        pub credentials: EncryptedCredentials,
    }
}

wire_record! {
    pub struct PassportFile {
        pub file_id: String,
        pub file_unique_id: String,
        pub file_size: i64,
        pub file_date: i64,
    }
}

wire_record! {
    pub struct EncryptedPassportElement {
        /// "personal_details", "passport", "utility_bill", "email", ...
        #[serde(rename = "type")]
        pub kind: String,
        /// Base64-encoded encrypted data.
        pub data: String,
        pub phone_number: String,
        pub email: String,
        pub files: Vec<PassportFile>,
        pub front_side: PassportFile,
        pub reverse_side: PassportFile,
        pub selfie: PassportFile,
        pub translation: Vec<PassportFile>,
        pub hash: String,
    }
}

wire_record! {
    pub struct EncryptedCredentials {
        pub data: String,
        pub hash: String,
        pub secret: String,
    }
}

wire_record! {
    /// An error in submitted Passport data, for `setPassportDataErrors`.
    ///
    /// The nine error sources share this record; `source` selects one and
    /// the constructors fill the fields that source requires.
    pub struct PassportElementError {
        pub source: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub field_name: String,
        pub data_hash: String,
        pub file_hash: String,
        pub file_hashes: Vec<String>,
        pub element_hash: String,
        pub message: String,
    }
}

impl PassportElementError {
    fn of(source: &str, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: Some(source.to_string()),
            kind: Some(kind.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn data_field(
        kind: impl Into<String>,
        field_name: impl Into<String>,
        data_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: Some(field_name.into()),
            data_hash: Some(data_hash.into()),
            ..Self::of("data", kind, message)
        }
    }

    fn single_file(
        source: &str,
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_hash: Some(file_hash.into()),
            ..Self::of(source, kind, message)
        }
    }

    pub fn front_side(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::single_file("front_side", kind, file_hash, message)
    }

    pub fn reverse_side(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::single_file("reverse_side", kind, file_hash, message)
    }

    pub fn selfie(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::single_file("selfie", kind, file_hash, message)
    }

    pub fn file(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::single_file("file", kind, file_hash, message)
    }

    pub fn files(kind: impl Into<String>, file_hashes: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            file_hashes: Some(file_hashes),
            ..Self::of("files", kind, message)
        }
    }

    pub fn translation_file(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::single_file("translation_file", kind, file_hash, message)
    }

    pub fn translation_files(
        kind: impl Into<String>,
        file_hashes: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_hashes: Some(file_hashes),
            ..Self::of("translation_files", kind, message)
        }
    }

    pub fn unspecified(
        kind: impl Into<String>,
        element_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            element_hash: Some(element_hash.into()),
            ..Self::of("unspecified", kind, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WireRecord;
    use serde_json::json;

    #[test]
    fn test_error_constructors_set_source() {
        let err = PassportElementError::data_field("passport", "number", "h1", "bad number");
        assert_eq!(
            err.to_value(),
            json!({
                "source": "data",
                "type": "passport",
                "field_name": "number",
                "data_hash": "h1",
                "message": "bad number"
            })
        );
        let err = PassportElementError::files("utility_bill", vec!["a".into(), "b".into()], "blurry");
        assert_eq!(err.source.as_deref(), Some("files"));
        assert_eq!(err.file_hashes.unwrap().len(), 2);
    }

    #[test]
    fn test_passport_data_hydrates_elements() {
        let data = PassportData::hydrate(&json!({
            "data": [{"type": "email", "email": "a@b.c", "hash": "x"}],
            "credentials": {"data": "d", "hash": "h", "secret": "s"}
        }));
        assert_eq!(data.data.unwrap()[0].email.as_deref(), Some("a@b.c"));
        assert_eq!(data.credentials.unwrap().secret.as_deref(), Some("s"));
    }
}
