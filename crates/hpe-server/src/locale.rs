//! Localized page strings

use serde::{Deserialize, Serialize};

/// Supported page languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

/// Every text shown by the page
#[derive(Debug, Serialize)]
pub struct Strings {
    pub title: &'static str,
    pub tagline: &'static str,
    pub join_heading: &'static str,
    pub name_placeholder: &'static str,
    pub strengths_placeholder: &'static str,
    pub aspirations_placeholder: &'static str,
    pub values_placeholder: &'static str,
    pub join_button: &'static str,
    pub manifesto_heading: &'static str,
    pub manifesto: [&'static str; 3],
    pub network_heading: &'static str,
    pub empty_network: &'static str,
    pub strengths_label: &'static str,
    pub aspirations_label: &'static str,
    pub values_label: &'static str,
    pub votes_label: &'static str,
    pub vote_button: &'static str,
    pub graph_heading: &'static str,
    pub join_cooldown: &'static str,
    pub vote_cooldown: &'static str,
}

static FR: Strings = Strings {
    title: "Human Potential Exchange",
    tagline: "Une plateforme vivante pour identifier, connecter et activer les potentiels humains vers l’évolution collective.",
    join_heading: "Rejoindre le réseau",
    name_placeholder: "Votre nom",
    strengths_placeholder: "Vos forces (ex: créativité, empathie)",
    aspirations_placeholder: "Vos aspirations (ex: éduquer, guérir, innover)",
    values_placeholder: "Vos valeurs (ex: liberté, respect, joie)",
    join_button: "Entrer dans l’échange",
    manifesto_heading: "Code d’éthique – Manifeste HPE",
    manifesto: [
        "Nous croyons que chaque être humain porte un potentiel unique, souvent endormi, parfois ignoré, mais toujours porteur de sens pour l’évolution collective.",
        "Nous refusons les systèmes qui réduisent la valeur humaine à la productivité ou à l’obéissance. Nous créons un réseau vivant, où les potentiels humains sont identifiés, valorisés, et coordonnés au service d’un progrès partagé.",
        "Notre but n’est pas la domination, mais la coordination consciente. Ce réseau n’appartient à personne. Il se bâtit par ceux qui s’y reconnaissent, et grandit par la qualité de leurs liens.",
    ],
    network_heading: "Réseau en expansion",
    empty_network: "Aucun membre encore. Soyez le premier à entrer dans l’échange.",
    strengths_label: "Forces",
    aspirations_label: "Aspirations",
    values_label: "Valeurs",
    votes_label: "Votes",
    vote_button: "Soutenir",
    graph_heading: "Carte des affinités",
    join_cooldown: "Vous avez déjà rejoint le réseau récemment. Réessayez plus tard.",
    vote_cooldown: "Vous avez déjà soutenu ce profil aujourd’hui.",
};

static EN: Strings = Strings {
    title: "Human Potential Exchange",
    tagline: "A living platform to identify, connect and activate human potential toward collective evolution.",
    join_heading: "Join the network",
    name_placeholder: "Your name",
    strengths_placeholder: "Your strengths (e.g. creativity, empathy)",
    aspirations_placeholder: "Your aspirations (e.g. teach, heal, innovate)",
    values_placeholder: "Your values (e.g. freedom, respect, joy)",
    join_button: "Enter the exchange",
    manifesto_heading: "Code of ethics – HPE Manifesto",
    manifesto: [
        "We believe every human being carries a unique potential, often dormant, sometimes ignored, yet always meaningful for collective evolution.",
        "We reject systems that reduce human worth to productivity or obedience. We are building a living network where human potential is identified, valued and coordinated in the service of shared progress.",
        "Our goal is not domination but conscious coordination. This network belongs to no one. It is built by those who recognize themselves in it, and grows through the quality of their bonds.",
    ],
    network_heading: "A growing network",
    empty_network: "No members yet. Be the first to enter the exchange.",
    strengths_label: "Strengths",
    aspirations_label: "Aspirations",
    values_label: "Values",
    votes_label: "Votes",
    vote_button: "Support",
    graph_heading: "Affinity map",
    join_cooldown: "You joined recently. Please try again later.",
    vote_cooldown: "You already supported this profile today.",
};

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }

    /// Pick the language from `?lang=`, then `Accept-Language`, else French
    pub fn negotiate(query: Option<&str>, accept_language: Option<&str>) -> Self {
        if let Some(locale) = query.and_then(Self::parse_tag) {
            return locale;
        }

        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|item| item.split(';').next())
            .find_map(Self::parse_tag)
            .unwrap_or_default()
    }

    fn parse_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(&['-', '_'][..]).next()?.to_lowercase();
        match primary.as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_french() {
        assert_eq!(Locale::negotiate(None, None), Locale::Fr);
        assert_eq!(Locale::negotiate(Some("de"), Some("es-ES,it")), Locale::Fr);
    }

    #[test]
    fn test_query_wins() {
        assert_eq!(Locale::negotiate(Some("EN"), Some("fr-FR")), Locale::En);
        assert_eq!(Locale::negotiate(Some("fr"), Some("en-US")), Locale::Fr);
    }

    #[test]
    fn test_accept_language_order() {
        assert_eq!(
            Locale::negotiate(None, Some("de-DE;q=0.9, en-GB;q=0.8, fr;q=0.7")),
            Locale::En
        );
    }

    #[test]
    fn test_french_text_preserved() {
        assert_eq!(Locale::Fr.strings().join_heading, "Rejoindre le réseau");
        assert_eq!(Locale::En.code(), "en");
    }
}
