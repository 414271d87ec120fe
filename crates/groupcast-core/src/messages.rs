//! User-facing status texts.
//!
//! Banners are plain text; multi-line banners use `\n` between lines.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Language of the status banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Uz,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Uz => &UZ,
            Locale::En => &EN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uz" => Ok(Locale::Uz),
            "en" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Message table for one locale.
#[derive(Debug)]
pub struct Messages {
    no_group_selected: &'static str,
    empty_payload: &'static str,
    success_prefix: &'static str,
    success_suffix: &'static str,
    failed_suffix: &'static str,
    errors_heading: &'static str,
    remote_error_prefix: &'static str,
    transport_error_prefix: &'static str,
    unknown_error: &'static str,
}

static UZ: Messages = Messages {
    no_group_selected: "❌ Kamida bitta guruhni tanlang!",
    empty_payload: "❌ Matn yoki fayl kiriting!",
    success_prefix: "✅ Muvaffaqiyat!",
    success_suffix: "ta guruhga yuborildi.",
    failed_suffix: "ta xatolik.",
    errors_heading: "Xatoliklar:",
    remote_error_prefix: "❌ Xatolik:",
    transport_error_prefix: "❌ Xatolik yuz berdi:",
    unknown_error: "Noma'lum xatolik",
};

static EN: Messages = Messages {
    no_group_selected: "❌ Select at least one group!",
    empty_payload: "❌ Enter a message or attach a file!",
    success_prefix: "✅ Success!",
    success_suffix: "group(s) received the message.",
    failed_suffix: "failed.",
    errors_heading: "Errors:",
    remote_error_prefix: "❌ Error:",
    transport_error_prefix: "❌ Request failed:",
    unknown_error: "Unknown error",
};

impl Messages {
    pub fn validation(&self, err: ValidationError) -> String {
        match err {
            ValidationError::NoGroupSelected => self.no_group_selected.to_string(),
            ValidationError::EmptyPayload => self.empty_payload.to_string(),
        }
    }

    /// Success banner; the failure count and itemized errors are appended
    /// only when some sends failed.
    pub fn delivered(&self, successful: u32, failed: u32, errors: &[String]) -> String {
        let mut message = format!(
            "{} {} {}",
            self.success_prefix, successful, self.success_suffix
        );
        if failed > 0 {
            message.push_str(&format!("\n❌ {} {}", failed, self.failed_suffix));
            if !errors.is_empty() {
                message.push_str("\n\n");
                message.push_str(self.errors_heading);
                for error in errors {
                    message.push('\n');
                    message.push_str(error);
                }
            }
        }
        message
    }

    pub fn rejected(&self, error: Option<&str>) -> String {
        format!(
            "{} {}",
            self.remote_error_prefix,
            error.unwrap_or(self.unknown_error)
        )
    }

    pub fn transport_failed(&self, reason: &str) -> String {
        format!("{} {}", self.transport_error_prefix, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locale() {
        assert_eq!("uz".parse::<Locale>().unwrap(), Locale::Uz);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert!("ru".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Uz);
    }

    #[test]
    fn delivered_without_failures_is_one_line() {
        let text = Locale::En.messages().delivered(3, 0, &["ignored".to_string()]);
        assert_eq!(text, "✅ Success! 3 group(s) received the message.");
    }

    #[test]
    fn delivered_with_failures_lists_errors() {
        let errors = vec![
            "Guruh topilmadi: -100123".to_string(),
            "Team: Forbidden".to_string(),
        ];
        let text = Locale::Uz.messages().delivered(1, 2, &errors);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "✅ Muvaffaqiyat! 1 ta guruhga yuborildi.");
        assert_eq!(lines[1], "❌ 2 ta xatolik.");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Xatoliklar:");
        assert_eq!(&lines[4..], &["Guruh topilmadi: -100123", "Team: Forbidden"]);
    }

    #[test]
    fn delivered_with_failures_but_no_detail() {
        let text = Locale::En.messages().delivered(0, 4, &[]);
        assert!(text.ends_with("❌ 4 failed."));
        assert!(!text.contains("Errors:"));
    }

    #[test]
    fn rejected_and_transport_texts() {
        let messages = Locale::En.messages();
        assert_eq!(messages.rejected(Some("x")), "❌ Error: x");
        assert_eq!(messages.rejected(None), "❌ Error: Unknown error");
        assert_eq!(
            messages.transport_failed("connection refused"),
            "❌ Request failed: connection refused"
        );
    }

    #[test]
    fn validation_texts() {
        let messages = Locale::Uz.messages();
        assert_eq!(
            messages.validation(ValidationError::NoGroupSelected),
            "❌ Kamida bitta guruhni tanlang!"
        );
        assert_eq!(
            messages.validation(ValidationError::EmptyPayload),
            "❌ Matn yoki fayl kiriting!"
        );
    }
}
