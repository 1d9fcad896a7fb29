//! Domain-level command and result types exchanged with the collaborators.
//!
//! The REST layer maps these to the wire DTOs in the `shared` crate.

pub mod booking {
    use serde::{Deserialize, Serialize};

    /// Visitor data as handed to the booking collaborator
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Visitor {
        pub name: String,
        pub national_id: u64,
        pub age: u32,
        pub clothing_size: Option<String>,
    }

    /// Finalized snapshot of a validated roster
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BookingRequest {
        pub schedule_id: i64,
        pub visitors: Vec<Visitor>,
        pub terms_accepted: bool,
    }

    /// Reference to the inscriptions created by the server
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BookingReceipt {
        pub inscription_ids: Vec<i64>,
        pub activity_name: Option<String>,
    }
}

pub mod notification {
    use super::booking::Visitor;
    use serde::{Deserialize, Serialize};

    /// Content of the confirmation email sent after a successful booking
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ConfirmationEmail {
        pub activity_name: String,
        pub schedule_id: i64,
        pub starts_at: String,
        pub ends_at: String,
        pub visitors: Vec<Visitor>,
        pub terms_accepted: bool,
    }

    impl ConfirmationEmail {
        pub fn subject(&self) -> String {
            format!("Adventure Park - Booking confirmed: {} ({} - {})", self.activity_name, self.starts_at, self.ends_at)
        }

        pub fn body(&self) -> String {
            let mut body = format!(
                "Hello!\n\nYour booking for {} is confirmed.\n\nSchedule: {} - {} (schedule #{})\nParticipants: {}\n\n",
                self.activity_name,
                self.starts_at,
                self.ends_at,
                self.schedule_id,
                self.visitors.len()
            );

            for (position, visitor) in self.visitors.iter().enumerate() {
                body.push_str(&format!(
                    "{}. {} - DNI {} - {} years",
                    position + 1,
                    visitor.name,
                    visitor.national_id,
                    visitor.age
                ));
                if let Some(size) = &visitor.clothing_size {
                    body.push_str(&format!(" - size {}", size));
                }
                body.push('\n');
            }

            body.push_str(&format!(
                "\nTerms and conditions accepted: {}\n\nPlease arrive 15 minutes early and bring your ID.\n\nSee you soon,\nAdventure Park",
                if self.terms_accepted { "yes" } else { "no" }
            ));
            body
        }
    }

}
