use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    Linkedin,
    X,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: config::INSTAGRAM_URL,
        icon: SocialIcon::Instagram,
    },
    SocialLink {
        label: "LinkedIn",
        href: config::LINKEDIN_URL,
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        label: "X",
        href: config::X_URL,
        icon: SocialIcon::X,
    },
];

impl SocialIcon {
    fn class(&self) -> &'static str {
        match self {
            SocialIcon::Instagram => "social-icon instagram",
            SocialIcon::Linkedin => "social-icon linkedin",
            SocialIcon::X => "social-icon x",
        }
    }

    fn shapes(&self) -> Html {
        match self {
            SocialIcon::Instagram => html! {
                <>
                    <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            SocialIcon::Linkedin => html! {
                <>
                    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                    <rect width="4" height="12" x="2" y="9" />
                    <circle cx="4" cy="4" r="2" />
                </>
            },
            SocialIcon::X => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
        }
    }

    pub fn render(&self) -> Html {
        html! {
            <svg
                class={self.class()}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                { self.shapes() }
            </svg>
        }
    }
}
