//! The built-in launch catalog.
//!
//! Task content is domain data, not behavior: editing these literals is
//! how the checklist itself is updated. Ids are the persistence keys, so
//! renaming an id orphans any saved completion state for it (stale ids
//! are tolerated and ignored at render time).

use super::catalog::{Catalog, Project, SharedTask, Task};

impl Catalog {
    /// The compiled-in marketing launch catalog
    pub fn builtin() -> Catalog {
        Catalog::new(
            vec![
                Project {
                    key: "pulselink".into(),
                    name: "PulseLink".into(),
                    color: "#FB4196".into(),
                    tasks: vec![
                        Task::new(
                            "pl1",
                            "Define a unique brand identity and tagline for PulseLink \
                             (e.g. \"PulseLink SOS: Silent Safety Alerts\")",
                        )
                        .with_phase("Foundation")
                        .with_day(1),
                        Task::new(
                            "pl2",
                            "Build a dedicated landing page for PulseLink with CTAs, a beta \
                             sign-up form, screenshots, and story",
                        )
                        .with_phase("Foundation")
                        .with_day(2),
                        Task::new(
                            "pl5",
                            "Optimize the Google Play listing: clear title with personal-safety \
                             keywords, detailed description and screenshots",
                        )
                        .with_phase("Foundation")
                        .with_day(2),
                        Task::new(
                            "pl4",
                            "Set up official social media accounts and post short explainer \
                             videos and scenarios demonstrating the app",
                        )
                        .with_phase("Content")
                        .with_day(3),
                        Task::new(
                            "pl3",
                            "Reach out to your personal network and target communities (solo \
                             travelers, campus groups) to recruit beta testers",
                        )
                        .with_phase("Outreach")
                        .with_day(4),
                        Task::new(
                            "pl6",
                            "Launch micro ad campaigns: test small budgets on social and search \
                             ads targeting parents, solo travelers and safety keywords",
                        )
                        .with_phase("Advertising")
                        .with_day(7),
                        Task::new(
                            "pl7",
                            "Collect user feedback, iterate the product, and prepare for a \
                             wider launch",
                        )
                        .with_phase("Launch")
                        .with_day(14),
                    ],
                },
                Project {
                    key: "uc4e".into(),
                    name: "Universe Connected".into(),
                    color: "#4488FF".into(),
                    tasks: vec![
                        Task::new(
                            "uc1",
                            "Create a Universe Connected landing page with a book summary, \
                             sample chapter, purchase links, and email sign-up",
                        )
                        .with_phase("Foundation")
                        .with_day(1),
                        Task::new(
                            "uc2",
                            "Optimize bookstore listings with accurate categories and \
                             keywords; encourage reviews",
                        )
                        .with_phase("Foundation")
                        .with_day(2),
                        Task::new(
                            "uc3",
                            "Produce short video or animated explainers of key concepts \
                             (quantum entanglement, fungal networks, AI)",
                        )
                        .with_phase("Content")
                        .with_day(5),
                        Task::new(
                            "uc4",
                            "Engage communities with interesting facts and discussions drawn \
                             from the book to spark interest",
                        )
                        .with_phase("Outreach")
                        .with_day(6),
                        Task::new(
                            "uc5",
                            "Run targeted ads on Amazon, BookBub, and social aimed at \
                             science-curious readers",
                        )
                        .with_phase("Advertising")
                        .with_day(8),
                        Task::new(
                            "uc6",
                            "Solicit reviews from early readers and reach out to influencers \
                             or blogs for features",
                        )
                        .with_phase("Outreach")
                        .with_day(10),
                    ],
                },
                Project {
                    key: "art".into(),
                    name: "D'Immortalio Artistry".into(),
                    color: "#CC66FF".into(),
                    tasks: vec![
                        Task::new(
                            "ot1",
                            "Fix the D'Immortalio website and create a dedicated portfolio \
                             with high-quality images",
                        )
                        .with_phase("Foundation")
                        .with_day(3),
                        Task::new(
                            "ot2",
                            "Establish a social media presence for the art and share finished \
                             pieces and work-in-progress videos",
                        )
                        .with_phase("Content")
                        .with_day(6),
                        Task::new(
                            "ot3",
                            "List the art on marketplaces like Etsy or Saatchi Art and run \
                             small targeted ads",
                        )
                        .with_phase("Advertising")
                        .with_day(9),
                    ],
                },
                Project {
                    key: "web".into(),
                    name: "Web Presence".into(),
                    color: "#44FF88".into(),
                    tasks: vec![
                        Task::new(
                            "ot4",
                            "Develop an official website for Holldasa LLC describing services \
                             and linking to the projects; claim the Google Business profile",
                        )
                        .with_phase("Foundation")
                        .with_day(4),
                        Task::new(
                            "ot5",
                            "Expand DamienNichols.com into a central hub that links to \
                             PulseLink, Universe Connected, the art, and the print shop",
                        )
                        .with_phase("Foundation")
                        .with_day(5),
                        // Deliberately unphased: sits in catalog order under no heading
                        Task::new(
                            "ot6",
                            "Create an online presence for the 3D printing business: local \
                             service page, Google Business listing, and local ads",
                        )
                        .with_day(11),
                    ],
                },
            ],
            vec![
                SharedTask::new(
                    "sh1",
                    "Set up a shared content calendar covering every project's posts for \
                     the first month",
                    &["pulselink", "uc4e", "art"],
                ),
                SharedTask::new(
                    "sh2",
                    "Install analytics on each landing page and define the conversion \
                     events to watch",
                    &["pulselink", "uc4e", "web"],
                ),
                SharedTask::new(
                    "sh3",
                    "Cross-link all the sites so every project points back to the \
                     central hub",
                    &["pulselink", "uc4e", "art", "web"],
                ),
            ],
        )
    }
}
