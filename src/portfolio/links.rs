use crate::models::SocialLinks;

pub const SOCIAL_LINKS: SocialLinks = SocialLinks {
    github: "https://github.com/pawelsloboda5",
    linkedin: "https://www.linkedin.com/in/pawel-sloboda-383181216/",
    twitter: "https://twitter.com/pawelsloboda",
    email: "mailto:pawelsloboda5@gmail.com",
    resume: "/FULL-STACK-AZURE-ENGINEER-PAWEL-SLOBODA.pdf",
};

pub const OWNER_NAME: &str = "Pawel Sloboda";
