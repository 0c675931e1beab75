use console::Color;

/// A framework group shown in the first selection prompt.
///
/// Two groups may share a `name` (the personal and company flavors of the
/// same framework); only variant identifiers are unique across the whole
/// catalog, so every lookup goes through [`find_variant`].
#[derive(Debug)]
pub struct Framework {
    pub name: &'static str,
    pub display: &'static str,
    pub color: Color,
    pub variants: &'static [Variant],
}

/// A buildable flavor of a framework.
///
/// A variant carrying a `custom_command` delegates scaffolding to an
/// external generator and never goes through the fetch/patch path.
#[derive(Debug)]
pub struct Variant {
    pub name: &'static str,
    pub display: &'static str,
    pub color: Color,
    pub custom_command: Option<&'static str>,
}

impl Variant {
    const fn template(name: &'static str, display: &'static str, color: Color) -> Self {
        Self {
            name,
            display,
            color,
            custom_command: None,
        }
    }

    const fn custom(
        name: &'static str,
        display: &'static str,
        color: Color,
        command: &'static str,
    ) -> Self {
        Self {
            name,
            display,
            color,
            custom_command: Some(command),
        }
    }
}

pub static FRAMEWORKS: &[Framework] = &[
    Framework {
        name: "vanilla",
        display: "Vanilla (personal)",
        color: Color::Yellow,
        variants: &[
            Variant::template("out-vanilla", "JavaScript", Color::Yellow),
            Variant::template("out-vanilla-ts", "TypeScript", Color::Blue),
        ],
    },
    Framework {
        name: "react",
        display: "React (personal)",
        color: Color::Yellow,
        variants: &[
            Variant::template("out-react", "JavaScript", Color::Yellow),
            Variant::template("out-react-ts", "TypeScript", Color::Blue),
        ],
    },
    Framework {
        name: "vue",
        display: "Vue (personal)",
        color: Color::Green,
        variants: &[
            Variant::template("out-vue", "JavaScript", Color::Yellow),
            Variant::template("out-vue-ts", "TypeScript", Color::Blue),
            Variant::custom(
                "custom-create-vue",
                "Customize with create-vue ↗",
                Color::Green,
                "npm create vue@latest TARGET_DIR",
            ),
            Variant::custom(
                "custom-nuxt",
                "Nuxt ↗",
                Color::Green,
                "npm exec nuxi init TARGET_DIR",
            ),
        ],
    },
    Framework {
        name: "react",
        display: "React (company)",
        color: Color::Cyan,
        variants: &[
            Variant::template("work-react", "JavaScript", Color::Yellow),
            Variant::template("work-react-ts", "TypeScript", Color::Blue),
        ],
    },
    Framework {
        name: "vue",
        display: "Vue (company)",
        color: Color::Magenta,
        variants: &[
            Variant::template("work-vue", "JavaScript", Color::Yellow),
            Variant::template("work-vue-ts", "TypeScript", Color::Blue),
        ],
    },
    Framework {
        name: "others",
        display: "Others",
        color: Color::White,
        variants: &[
            Variant::custom(
                "create-vite-extra",
                "create-vite-extra ↗",
                Color::White,
                "npm create vite-extra@latest TARGET_DIR",
            ),
            Variant::custom(
                "create-electron-vite",
                "create-electron-vite ↗",
                Color::White,
                "npm create electron-vite@latest TARGET_DIR",
            ),
        ],
    },
];

/// Looks up a variant by its globally unique identifier.
pub fn find_variant(name: &str) -> Option<&'static Variant> {
    FRAMEWORKS
        .iter()
        .flat_map(|f| f.variants.iter())
        .find(|v| v.name == name)
}

/// All variant identifiers, in catalog order.
pub fn template_names() -> Vec<&'static str> {
    FRAMEWORKS
        .iter()
        .flat_map(|f| f.variants.iter())
        .map(|v| v.name)
        .collect()
}

/// Strips the SWC acceleration marker from a template identifier.
///
/// Returns the base template identifier and whether the marker was present.
/// The SWC flavor shares its file tree with the base template; the
/// difference is applied as a post-fetch patch.
pub fn split_swc_marker(template: &str) -> (String, bool) {
    if template.contains("-swc") {
        (template.replacen("-swc", "", 1), true)
    } else {
        (template.to_string(), false)
    }
}
