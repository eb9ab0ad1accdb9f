//! Help guide content.

/// One titled block of the guide
#[derive(Debug, Clone, Copy)]
pub struct HelpSection {
    pub title: &'static str,
    /// (label, text) pairs; an empty label means plain text
    pub items: &'static [(&'static str, &'static str)],
}

pub const GUIDE_TITLE: &str = "How to Use Cite Rite";

pub const GUIDE: &[HelpSection] = &[
    HelpSection {
        title: "Introduction",
        items: &[(
            "",
            "Cite Rite helps you analyze texts to identify claims and their supporting citations. \
             It breaks down a document into testable claims and searches for evidence to back them up.",
        )],
    },
    HelpSection {
        title: "Key Features",
        items: &[
            ("Claims Analysis", "Texts are broken down into logical statements (claims)."),
            ("Citation Matching", "Claims are matched with relevant citations from reputable sources."),
            ("Hierarchical View", "Claims are organized in a parent-child relationship to show logical dependencies."),
            ("Source Verification", "Each citation includes links to original sources for verification."),
        ],
    },
    HelpSection {
        title: "How to Use the Session",
        items: &[
            ("Input text", "Type `text <your text>`, or `sample` to load the next sample paragraph."),
            ("Analyze", "Type `go` to process the text and identify claims and citations."),
            ("Explore claims", "Type `select <claim-id>` to view a claim's citations; `clear` deselects."),
            ("Switch views", "Type `view tree`, `view document` or `toggle`. The document view highlights every claim in the original text."),
            ("Verify sources", "Open the links listed under each citation to read the original source."),
        ],
    },
    HelpSection {
        title: "Understanding the Results",
        items: &[
            ("Citation coverage", "The percentage of claims that have supporting citations."),
            ("Source quality", "Citations are tagged by source type (e.g., Academic, Blog, Government)."),
            ("Claim relationships", "Parent claims represent broader statements, while child claims offer supporting details."),
        ],
    },
];
