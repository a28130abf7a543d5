//! All display text for the page, pinned as constants.
//!
//! The page renders nothing it does not find here, so the tests can pin
//! section counts and ordering against this module alone.

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_label: &'static str,
    pub github_label: &'static str,
    pub location: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "Sadaf.biglarian02@gmail.com",
    phone: "09113281488",
    linkedin_label: "لینک پروفایل",
    github_label: "لینک گیت‌هاب",
    location: "مازندران، کلاردشت",
};

// Order matters: the sidebar renders these as-is.
pub const SKILLS: &[&str] = &["Python", "JavaScript / Next.js", "SQL", "Git & GitHub"];

pub const CREDENTIALS: &[&str] = &["کارشناسی کامپیوتر – 1400", "جاوا اسکریپت"];

pub const NAME: &str = "صدف بیگ لریان";
pub const TITLE: &str = "Network Security Engineer";
pub const TAGLINE: &str =
    "متخصص طراحی، پیاده‌سازی و امن‌سازی زیرساخت‌های شبکه، فایروال، VPN و مانیتورینگ امنیتی";

pub const ABOUT: &str = "مهندس امنیت شبکه با تجربه در طراحی و پیاده‌سازی زیرساخت‌های امن، \
پیکربندی فایروال‌ها، راه‌اندازی VPNهای سازمانی و مانیتورینگ رویدادهای امنیتی. \
مسلط به مفاهیم روتینگ، سوئیچینگ، پروتکل‌های امنیتی و تست نفوذ پایه روی شبکه. \
سابقه کار با تیم‌های زیرساخت و توسعه برای شناسایی و رفع آسیب‌پذیری‌ها و \
پیاده‌سازی Best Practiceهای امنیتی. علاقه‌مند به یادگیری مداوم و مستندسازی و \
آموزش مفاهیم امنیت به اعضای تیم.";

pub const EXPERIENCE: &[&str] =
    &["توسعه پنل مدیریت برای یک فروشگاه آنلاین با استفاده از next.js."];

pub const INTERESTS: &[&str] = &[
    "شرکت در مسابقات برنامه‌نویسی و حل مسئله",
    "تولید محتوا آموزشی",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_fixed_and_ordered() {
        assert_eq!(
            SKILLS,
            &["Python", "JavaScript / Next.js", "SQL", "Git & GitHub"]
        );
    }

    #[test]
    fn section_counts_match_the_page() {
        assert_eq!(CREDENTIALS.len(), 2);
        assert_eq!(EXPERIENCE.len(), 1);
        assert_eq!(INTERESTS.len(), 2);
    }

    #[test]
    fn contact_literals() {
        assert_eq!(CONTACT.email, "Sadaf.biglarian02@gmail.com");
        assert_eq!(CONTACT.phone, "09113281488");
    }
}
