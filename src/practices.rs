//! Built-in cybersecurity best-practice reference content.
//!
//! Shown with `starmark --practices`. Each practice becomes a heading,
//! a plain description and an italic example.

use crate::markup::StyledDocument;

pub const PRACTICES_TITLE: &str = "Cybersecurity Best Practices";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Practice {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const PRACTICES: &[Practice] = &[
    Practice {
        title: "1. Use Strong Passwords",
        description: "Create passwords that are at least 12 characters long and combine uppercase letters, lowercase letters, numbers, and symbols. Using a password manager can help you generate and securely store these passwords.",
        example: "Example: Use a generated password like \"G7#t9kL!zP3e\".",
    },
    Practice {
        title: "2. Enable Multi-Factor Authentication (MFA)",
        description: "Add an extra layer of security by requiring a second form of verification. This reduces the risk of unauthorized access even if your password is compromised.",
        example: "Example: Pair your password with an authenticator app such as Google Authenticator.",
    },
    Practice {
        title: "3. Keep Software and Devices Updated",
        description: "Regular updates patch vulnerabilities and improve security. Ensuring your systems are up to date is one of the easiest ways to protect against threats.",
        example: "Example: Enable automatic updates on your smartphone and computer.",
    },
    Practice {
        title: "4. Be Cautious with Email Attachments and Links",
        description: "Phishing attacks often use deceptive emails to trick you into clicking on malicious links or opening harmful attachments. Always verify the source before interacting.",
        example: "Example: Hover over links to preview the URL and double-check the sender's details.",
    },
    Practice {
        title: "5. Regularly Back Up Important Data",
        description: "Backing up data ensures you can recover information in case of hardware failure, ransomware, or accidental deletion. Keep backups in a separate, secure location.",
        example: "Example: Use a cloud backup service or an external drive for routine backups.",
    },
    Practice {
        title: "6. Use Antivirus and Anti-Malware Solutions",
        description: "Security software can detect and remove threats before they cause harm. Regular scans help maintain your system's security.",
        example: "Example: Install trusted antivirus software and schedule weekly scans.",
    },
    Practice {
        title: "7. Educate Yourself and Others on Cybersecurity",
        description: "Staying informed about current threats and best practices is essential. Regular education helps you and your team recognize and respond to potential risks.",
        example: "Example: Attend online cybersecurity courses or webinars to keep up with the latest trends.",
    },
];

impl Practice {
    /// Markup for a single practice card.
    pub fn to_markup(&self) -> String {
        format!(
            "***{}***\n{}\n*{}*\n",
            self.title, self.description, self.example
        )
    }
}

/// Markup source for the full practices page.
pub fn practices_markup() -> String {
    let mut out = format!("***{PRACTICES_TITLE}***\n");
    for practice in PRACTICES {
        out.push_str(&practice.to_markup());
    }
    out
}

/// The practices page, parsed.
pub fn practices_document() -> StyledDocument {
    StyledDocument::parse(&practices_markup())
}
