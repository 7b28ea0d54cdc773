use crate::domain::model::Contact;
use crate::utils::error::CatalogError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Phone,
    Email,
    WhatsApp,
}

impl FromStr for ContactChannel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" | "tel" => Ok(ContactChannel::Phone),
            "email" | "mail" => Ok(ContactChannel::Email),
            "whatsapp" => Ok(ContactChannel::WhatsApp),
            _ => Err(CatalogError::UnknownFilterValue {
                kind: "contact channel",
                value: s.to_string(),
            }),
        }
    }
}

/// 某筆列表在指定管道下的聯絡連結
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub id: i64,
    pub link: String,
}

impl Contact {
    /// 撥號、寄信或通訊軟體的深層連結
    pub fn link(&self, channel: ContactChannel) -> String {
        match channel {
            ContactChannel::Phone => format!("tel:{}", self.phone),
            ContactChannel::Email => format!("mailto:{}", self.email),
            // wa.me wants the number without the leading '+'
            ContactChannel::WhatsApp => {
                format!("https://wa.me/{}", self.whatsapp.replacen('+', "", 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Contact {
        Contact {
            phone: "+254 700 123 456".to_string(),
            email: "agent@example.com".to_string(),
            whatsapp: "+254700123456".to_string(),
        }
    }

    #[test]
    fn test_links() {
        let contact = agent();
        assert_eq!(contact.link(ContactChannel::Phone), "tel:+254 700 123 456");
        assert_eq!(contact.link(ContactChannel::Email), "mailto:agent@example.com");
        assert_eq!(
            contact.link(ContactChannel::WhatsApp),
            "https://wa.me/254700123456"
        );
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("WhatsApp".parse::<ContactChannel>().unwrap(), ContactChannel::WhatsApp);
        assert_eq!("tel".parse::<ContactChannel>().unwrap(), ContactChannel::Phone);
        assert!("fax".parse::<ContactChannel>().is_err());
    }
}
