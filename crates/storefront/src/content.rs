//! Static copy for the hero, about, contacts and footer panels.
//!
//! The shop has no CMS; everything here is compiled in and handed to the
//! templates as plain view structs.

/// Hero (landing) section.
#[derive(Debug, Clone)]
pub struct HeroContent {
    pub title: String,
    /// Highlighted tail of the title.
    pub title_accent: String,
    pub subtitle: String,
    pub cta_text: String,
    pub secondary_cta_text: String,
    pub image_url: String,
    pub image_alt: String,
    pub badge_value: String,
    pub badge_label: String,
}

/// A headline number on the about panel.
#[derive(Debug, Clone)]
pub struct Stat {
    pub icon: String,
    pub value: String,
    pub label: String,
}

/// One row of the contacts panel.
#[derive(Debug, Clone)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    /// `tel:` / `mailto:` link, if the value is actionable.
    pub href: Option<String>,
}

/// Footer social link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// All static page content.
#[derive(Debug, Clone)]
pub struct StoreContent {
    pub brand: String,
    pub brand_icon: String,
    pub tagline: String,
    pub hero: HeroContent,
    pub about_paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub contacts: Vec<ContactEntry>,
    pub socials: Vec<SocialLink>,
}

impl Default for StoreContent {
    fn default() -> Self {
        Self {
            brand: "ПёсЛакомка".to_string(),
            brand_icon: "🐕".to_string(),
            tagline: "Натуральные лакомства для вашего питомца".to_string(),
            hero: HeroContent {
                title: "Лакомства, которые".to_string(),
                title_accent: "любит ваш питомец".to_string(),
                subtitle: "Натуральные и полезные угощения для здоровья и радости вашей собаки"
                    .to_string(),
                cta_text: "Смотреть каталог".to_string(),
                secondary_cta_text: "Узнать больше".to_string(),
                image_url: "https://cdn.poehali.dev/projects/4270008b-dcd7-452c-986c-97298adfb589/files/642b7d4d-f04e-4eed-9997-2bbc7e7145b5.jpg".to_string(),
                image_alt: "Счастливая собака".to_string(),
                badge_value: "100%".to_string(),
                badge_label: "Натуральные".to_string(),
            },
            about_paragraphs: vec![
                "ПёсЛакомка — это семейный бизнес, основанный любителями собак для любителей собак. Мы производим натуральные лакомства из отборных ингредиентов.".to_string(),
                "Наша миссия — сделать каждую собаку счастливее через вкусные и полезные угощения. Все продукты проходят строгий контроль качества.".to_string(),
            ],
            stats: vec![
                Stat {
                    icon: "🏆".to_string(),
                    value: "5 лет".to_string(),
                    label: "На рынке".to_string(),
                },
                Stat {
                    icon: "❤️".to_string(),
                    value: "10000+".to_string(),
                    label: "Довольных питомцев".to_string(),
                },
                Stat {
                    icon: "✨".to_string(),
                    value: "100%".to_string(),
                    label: "Натуральные".to_string(),
                },
            ],
            contacts: vec![
                ContactEntry {
                    label: "Телефон".to_string(),
                    value: "+7 (999) 123-45-67".to_string(),
                    href: Some("tel:+79991234567".to_string()),
                },
                ContactEntry {
                    label: "Email".to_string(),
                    value: "info@peslakomka.ru".to_string(),
                    href: Some("mailto:info@peslakomka.ru".to_string()),
                },
                ContactEntry {
                    label: "Адрес".to_string(),
                    value: "г. Москва, ул. Собачья, д. 12".to_string(),
                    href: None,
                },
                ContactEntry {
                    label: "Режим работы".to_string(),
                    value: "Пн-Вс: 9:00 - 21:00".to_string(),
                    href: None,
                },
            ],
            socials: vec![
                SocialLink {
                    name: "Instagram".to_string(),
                    url: "https://instagram.com/".to_string(),
                },
                SocialLink {
                    name: "Facebook".to_string(),
                    url: "https://facebook.com/".to_string(),
                },
                SocialLink {
                    name: "Twitter".to_string(),
                    url: "https://twitter.com/".to_string(),
                },
            ],
        }
    }
}
