//! Built-in club directory used on first run

use crate::models::{Club, Contact};

/// (id, name, description, logo, phone, email)
const SEED_CLUBS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "1",
        "United Dance Crew",
        "Move to the rhythm with various dance forms and performances.",
        "United_Dance_Crew.jpg",
        "+91 1234567890",
        "udc@cbit.ac.in",
    ),
    (
        "2",
        "CBIT NSS",
        "National Service Scheme - Make a difference through community service.",
        "CBIT_NSS.jpg",
        "+91 1234567891",
        "nss@cbit.ac.in",
    ),
    (
        "3",
        "CBIT Open Source Community",
        "Explore open source technologies and contribute to the community.",
        "CBIT_Open_Source_Community.jpg",
        "+91 1234567892",
        "cosc@cbit.ac.in",
    ),
    (
        "4",
        "CBIT Spandana Club",
        "Multi-disciplinary club promoting various arts and cultural activities.",
        "CBIT_Spandana_Club.jpg",
        "+91 1234567893",
        "spandana@cbit.ac.in",
    ),
    (
        "5",
        "Chaaya - The Film Club",
        "Explore cinema, filmmaking, and visual storytelling.",
        "Chaaya_-_The_Film_Club.jpg",
        "+91 1234567894",
        "chaaya@cbit.ac.in",
    ),
    (
        "6",
        "Chaitanya Geethi",
        "Express yourself through music, vocals, and performances.",
        "Chaitanya_Geethi.jpg",
        "+91 1234567895",
        "geethi@cbit.ac.in",
    ),
    (
        "7",
        "Chaitanya Kreeda",
        "Promote sports, fitness, and athletic excellence.",
        "Chaitanya_Kreeda.jpg",
        "+91 1234567896",
        "kreeda@cbit.ac.in",
    ),
    (
        "8",
        "Chaitanya Samskruthi",
        "Celebrate culture, literature, and traditional arts.",
        "Chaitanya_Samskruthi.jpg",
        "+91 1234567897",
        "samskruthi@cbit.ac.in",
    ),
    (
        "9",
        "Chaitanya Vaadya",
        "Instrumental music club fostering musical talent.",
        "Chaitanya_Vaadya.jpg",
        "+91 1234567898",
        "vaadya@cbit.ac.in",
    ),
    (
        "10",
        "IEEE CBIT",
        "Institute of Electrical and Electronics Engineers student chapter.",
        "IEEE-CBIT.jpg",
        "+91 1234567899",
        "ieee@cbit.ac.in",
    ),
];

/// The ten clubs present before any admin edits
pub fn initial_clubs() -> Vec<Club> {
    SEED_CLUBS
        .iter()
        .map(|&(id, name, description, logo, phone, email)| Club {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            logo: logo.to_string(),
            contacts: vec![Contact::new("Admin", phone).with_email(email)],
        })
        .collect()
}
