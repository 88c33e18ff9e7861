use serde::{Deserialize, Serialize};

/// Project categories used for grid filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    ThreeJs,
    MarkerBased,
    Markerless,
}

impl Category {
    /// Convert string identifier to category for frontend compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "threejs" => Some(Self::ThreeJs),
            "markerbased" => Some(Self::MarkerBased),
            "markerless" => Some(Self::Markerless),
            _ => None,
        }
    }

    /// Wire/markup identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeJs => "threejs",
            Self::MarkerBased => "markerbased",
            Self::Markerless => "markerless",
        }
    }
}

/// Grid filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_string(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            Some(Self::All)
        } else {
            Category::from_string(s).map(Self::Only)
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

/// Card media: a linked preview image, or an embedded video frame.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Image {
        src: &'static str,
        alt: &'static str,
    },
    Frame {
        src: &'static str,
        title: &'static str,
    },
}

/// Button style variants mirrored from the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    Primary,
    Success,
}

impl LinkVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
    pub variant: LinkVariant,
}

/// One immutable portfolio entry. No lifecycle beyond module load.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub media: Media,
    pub links: &'static [Link],
    pub demo_url: Option<&'static str>,
}

impl ProjectRecord {
    /// Preferred outbound URL: the demo if present, else the first link.
    pub fn primary_url(&self) -> &'static str {
        self.demo_url
            .or_else(|| self.links.first().map(|link| link.url))
            .unwrap_or("#")
    }
}

pub const CATALOGUE: &[ProjectRecord] = &[
    ProjectRecord {
        id: "sphere-landing",
        category: Category::ThreeJs,
        title: "Sphere - 3D Landing Page",
        description: "Interactive 3D sphere rendered in Three.js. Users can view and manipulate the sphere in the browser.",
        stack: &["Three.js", "JavaScript", "HTML", "CSS"],
        media: Media::Image {
            src: "assets/gifs/sphere.gif",
            alt: "Animated Three.js sphere demo",
        },
        links: &[Link {
            label: "GitHub",
            url: "https://github.com/hachemawawi/3d-sphere-landingpage",
            variant: LinkVariant::Primary,
        }],
        demo_url: Some("https://github.com/hachemawawi/3d-sphere-landingpage"),
    },
    ProjectRecord {
        id: "virtual-try-on",
        category: Category::MarkerBased,
        title: "Virtual Try-On",
        description: "Virtual try-on experience powered by Three.js and MindAR that lets users preview outfits in augmented reality.",
        stack: &["Three.js", "MindAR.js", "TensorFlow.js"],
        media: Media::Image {
            src: "assets/gifs/tryOn.gif",
            alt: "Virtual try-on WebAR experience",
        },
        links: &[
            Link {
                label: "GitHub",
                url: "https://github.com/hachemawawi/Virtual-Try-On",
                variant: LinkVariant::Primary,
            },
            Link {
                label: "Try WebAR",
                url: "https://hachemawawi.me/Virtual-Try-On/",
                variant: LinkVariant::Success,
            },
        ],
        demo_url: Some("https://hachemawawi.me/Virtual-Try-On/"),
    },
    ProjectRecord {
        id: "virtual-classroom",
        category: Category::ThreeJs,
        title: "Virtual Classroom",
        description: "Immersive virtual classroom walkthrough showcasing the future of interactive teaching environments.",
        stack: &["Next.js", "React Three Fiber", "Tailwind CSS"],
        media: Media::Image {
            src: "assets/gifs/vrClass.gif",
            alt: "Virtual classroom experience",
        },
        links: &[Link {
            label: "GitHub",
            url: "https://github.com/hachemawawi/vrclass-ai-teacher",
            variant: LinkVariant::Primary,
        }],
        demo_url: Some("https://github.com/hachemawawi/vrclass-ai-teacher"),
    },
    ProjectRecord {
        id: "gaming-chair",
        category: Category::Markerless,
        title: "Place The Gaming Chair",
        description: "World-tracked AR placement demo that anchors a gaming chair into real-world environments using WebXR.",
        stack: &["A-Frame", "Three.js", "WebXR"],
        media: Media::Image {
            src: "assets/gifs/placeFurniture.gif",
            alt: "Gaming chair placed in AR",
        },
        links: &[Link {
            label: "Try WebAR",
            url: "https://h-hitt.glitch.me/",
            variant: LinkVariant::Success,
        }],
        demo_url: Some("https://h-hitt.glitch.me/"),
    },
    ProjectRecord {
        id: "business-card",
        category: Category::MarkerBased,
        title: "Business Card WebAR",
        description: "AR-enhanced business card featuring a custom talking avatar that reacts to user interactions.",
        stack: &["Three.js", "AR.js", "A-Frame", "Blender"],
        media: Media::Frame {
            src: "https://www.youtube.com/embed/Ufx6JM2NE4w?si=43wZaacLCgZDJHyz",
            title: "Business Card WebAR demo",
        },
        links: &[Link {
            label: "Try WebAR",
            url: "https://oneplus-bc.glitch.me/",
            variant: LinkVariant::Success,
        }],
        demo_url: Some("https://oneplus-bc.glitch.me/"),
    },
    ProjectRecord {
        id: "saudi-day",
        category: Category::MarkerBased,
        title: "Saudi National Day Face Filter",
        description: "Cross-platform AR face filter with capture and record functionality to celebrate Saudi National Day.",
        stack: &["Three.js", "MindAR.js", "TensorFlow.js"],
        media: Media::Frame {
            src: "https://www.youtube.com/embed/ZOswetGYt7I?si=8w6Af3flSZPrXZ-U",
            title: "Saudi National Day face filter demo",
        },
        links: &[Link {
            label: "Try WebAR",
            url: "https://fullmask.glitch.me/",
            variant: LinkVariant::Success,
        }],
        demo_url: Some("https://fullmask.glitch.me/"),
    },
    ProjectRecord {
        id: "avatar-clone",
        category: Category::MarkerBased,
        title: "Avatar Clone Shooting Fire",
        description: "Marker-based AR experience where a custom avatar clone launches fire effects in real time.",
        stack: &["Three.js", "A-Frame", "JavaScript", "AR.js", "Blender"],
        media: Media::Frame {
            src: "https://www.youtube.com/embed/dCo52lJyF2Q?si=-Ih7KgrIAB9whSWC",
            title: "Avatar Clone WebAR demo",
        },
        links: &[Link {
            label: "Try WebAR",
            url: "https://h-clone.glitch.me/",
            variant: LinkVariant::Success,
        }],
        demo_url: Some("https://h-clone.glitch.me/"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip() {
        for category in [Category::ThreeJs, Category::MarkerBased, Category::Markerless] {
            assert_eq!(Category::from_string(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_string("MARKERBASED"), Some(Category::MarkerBased));
        assert_eq!(Category::from_string("webgl"), None);
    }

    #[test]
    fn filter_parsing_accepts_all_and_categories() {
        assert_eq!(CategoryFilter::from_string("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_string("threejs"),
            Some(CategoryFilter::Only(Category::ThreeJs))
        );
        assert_eq!(CategoryFilter::from_string("bogus"), None);
    }

    #[test]
    fn catalogue_ids_are_unique() {
        for (i, record) in CATALOGUE.iter().enumerate() {
            assert!(
                CATALOGUE[i + 1..].iter().all(|other| other.id != record.id),
                "duplicate id {}",
                record.id
            );
        }
    }

    #[test]
    fn primary_url_prefers_demo_then_first_link() {
        let record = ProjectRecord {
            demo_url: None,
            ..CATALOGUE[0]
        };
        assert_eq!(record.primary_url(), record.links[0].url);
        assert_eq!(CATALOGUE[0].primary_url(), CATALOGUE[0].demo_url.unwrap());
    }
}
