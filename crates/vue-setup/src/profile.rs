//! Vue 3 template profile: what setup asks and which files it rewrites

use setup_core::{
    FieldSpec, PatternFlags, Question, ReplacementRule, SetupProfile, SetupResult, TargetFile,
};

/// Vue 3 project template
#[derive(Clone)]
pub struct VueTemplate;

const QUESTIONS: &[Question] = &[
    Question::new("PROJECT_NAME", "📦", "Project name"),
    Question::new("PROJECT_DESCRIPTION", "📝", "Project description"),
    Question::new("AUTHOR_NAME", "👤", "Your name"),
    Question::new("AUTHOR_EMAIL", "📧", "Your email"),
    Question::new("AUTHOR_URL", "🌐", "Your website URL"),
    Question::new("AUTHOR_LOCATION", "📍", "Your location"),
    Question::new("PROJECT_URL", "🔗", "Project URL"),
    Question::new("PROJECT_REPO", "📂", "GitHub repository URL"),
    Question::new("PROJECT_TWITTER", "🐦", "Twitter handle"),
    Question::new("PROJECT_INSTAGRAM", "📸", "Instagram handle"),
    Question::new("HEX_THEME_COLORS", "🎨", "Theme color hex"),
    Question::new("GA_MEASUREMENT_ID", "📊", "Google Analytics ID"),
    Question::new("GTM_ID", "🏷️", "Google Tag Manager ID"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::asked("PROJECT_NAME"),
    FieldSpec::asked("PROJECT_DESCRIPTION"),
    FieldSpec::default_only("PROJECT_KEYWORDS"),
    FieldSpec::asked("AUTHOR_NAME"),
    FieldSpec::asked("AUTHOR_EMAIL"),
    FieldSpec::asked("AUTHOR_URL"),
    FieldSpec::asked("AUTHOR_LOCATION"),
    FieldSpec::url("PROJECT_URL"),
    FieldSpec::asked("PROJECT_REPO"),
    FieldSpec::asked("PROJECT_TWITTER"),
    FieldSpec::asked("PROJECT_INSTAGRAM"),
    FieldSpec::asked("HEX_THEME_COLORS"),
    FieldSpec::default_only("HEX_BACKGROUND_COLORS"),
    FieldSpec::fan_out("HEX_TILE_COLOR", "HEX_THEME_COLORS"),
    FieldSpec::fan_out("HEX_THEME_COLOR", "HEX_THEME_COLORS"),
    FieldSpec::default_only("PROJECT_PROGRAMMING_LANGUAGE"),
    FieldSpec::default_only("PROJECT_OPERATING_SYSTEM"),
    FieldSpec::default_only("PROJECT_APPLICATION_CATEGORY"),
    FieldSpec::asked("GA_MEASUREMENT_ID"),
    FieldSpec::asked("GTM_ID"),
];

impl SetupProfile for VueTemplate {
    fn name(&self) -> &'static str {
        "vue-setup"
    }

    fn display_name(&self) -> &'static str {
        "Vue 3 Project Template"
    }

    fn catalog_location(&self) -> &'static str {
        "scripts/config.json"
    }

    fn catalog_env(&self) -> &'static str {
        "VUE_SETUP_CONFIG"
    }

    fn questions(&self) -> Vec<Question> {
        QUESTIONS.to_vec()
    }

    fn fields(&self) -> Vec<FieldSpec> {
        FIELDS.to_vec()
    }

    fn targets(&self) -> SetupResult<Vec<TargetFile>> {
        Ok(vec![
            TargetFile::new("package.json")
                .tokens(&["PROJECT_NAME", "PROJECT_DESCRIPTION", "PROJECT_KEYWORDS"])
                .rule(ReplacementRule::literal("[PROJECT_AUTHOR]", "AUTHOR_NAME")),
            TargetFile::new("index.html")
                .tokens(&[
                    "PROJECT_NAME",
                    "PROJECT_DESCRIPTION",
                    "PROJECT_KEYWORDS",
                    "AUTHOR_NAME",
                    "AUTHOR_URL",
                    "PROJECT_URL",
                    "GA_MEASUREMENT_ID",
                    "GTM_ID",
                    "HEX_TILE_COLOR",
                    "HEX_THEME_COLOR",
                ])
                .rule(ReplacementRule::literal(
                    "PROJECT_PROGRAMMING_LANGUAGE",
                    "PROJECT_PROGRAMMING_LANGUAGE",
                ))
                .tokens(&["PROJECT_OPERATING_SYSTEM", "PROJECT_APPLICATION_CATEGORY"]),
            TargetFile::new("sitemap.xml").tokens(&["PROJECT_URL", "PROJECT_NAME"]),
            TargetFile::new("site.webmanifest").tokens(&[
                "PROJECT_NAME",
                "PROJECT_DESCRIPTION",
                "HEX_THEME_COLORS",
                "HEX_BACKGROUND_COLORS",
            ]),
            TargetFile::new("robots.txt").tokens(&["PROJECT_URL"]),
            TargetFile::new("humans.txt").tokens(&[
                "AUTHOR_NAME",
                "AUTHOR_LOCATION",
                "PROJECT_TWITTER",
                "PROJECT_INSTAGRAM",
                "PROJECT_NAME",
            ]),
            TargetFile::new("vite.config.js").rule(ReplacementRule::pattern(
                r"/\[PROJECT_NAME\]/",
                PatternFlags::default(),
                "PROJECT_NAME",
            )?),
            TargetFile::new(".env.example").tokens(&["PROJECT_URL"]),
            TargetFile::new("src/views/Home.vue").tokens(&[
                "PROJECT_NAME",
                "PROJECT_DESCRIPTION",
                "PROJECT_REPO",
            ]),
            TargetFile::new("tailwind.config.js").rule(ReplacementRule::pattern(
                "#3b82f6",
                PatternFlags::default(),
                "HEX_THEME_COLORS",
            )?),
            TargetFile::new("src/components/Header.vue").tokens(&["PROJECT_NAME"]),
        ])
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            "Run `npm install` to install dependencies".to_string(),
            "Run `npm run dev` to start development".to_string(),
            "Customize your app in the src/ directory".to_string(),
            "Delete the setup script when you're done".to_string(),
        ]
    }
}
