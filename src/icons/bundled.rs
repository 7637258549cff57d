//! Compiled-in icon table.
//!
//! Each record is a single flat glyph in the 24x24 icon coordinate space
//! paired with the brand color of the technology it stands for. The table
//! covers every reference in the bundled catalog; deployments that need the
//! full upstream artwork load a dataset through
//! [`JsonIconProvider`](super::JsonIconProvider) instead.

use super::{IconData, VectorIconProvider};

const CIRCLE: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z";
const RING: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zm0 4a6 6 0 1 1 0 12a6 6 0 1 1 0-12z";
const ROUNDED: &str = "M6 2h12a4 4 0 0 1 4 4v12a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4V6a4 4 0 0 1 4-4z";
const DIAMOND: &str = "M12 1l11 11l-11 11L1 12z";
const HEXAGON: &str = "M12 1l9.5 5.5v11L12 23l-9.5-5.5v-11z";
const TRIANGLE: &str = "M12 2L23 21H1z";
const SHIELD: &str = "M12 1L3 5v6c0 5.6 3.8 10.7 9 12c5.2-1.3 9-6.4 9-12V5z";
const STAR: &str = "M12 1.5l3.1 6.9l7.4.8l-5.6 5l1.6 7.3L12 17.8l-6.5 3.7l1.6-7.3l-5.6-5l7.4-.8z";
const BARS: &str = "M2 4h20v4H2zm0 6h20v4H2zm0 6h20v4H2z";

/// `(key, title, hex, path)`, sorted by key.
static ICONS: &[(&str, &str, &str, &str)] = &[
    ("siAmazonwebservices", "Amazon Web Services", "FF9900", DIAMOND),
    ("siAngular", "Angular", "DD0031", DIAMOND),
    ("siApachekafka", "Apache Kafka", "231F20", TRIANGLE),
    ("siApachekafkawhite", "Apache Kafka", "FFFFFF", TRIANGLE),
    ("siApachemaven", "Apache Maven", "C71A36", TRIANGLE),
    ("siAzure", "Microsoft Azure", "0078D4", TRIANGLE),
    ("siBlender", "Blender", "E87D0D", SHIELD),
    ("siBun", "Bun", "FBF0DF", TRIANGLE),
    ("siC", "C", "A8B9CC", BARS),
    ("siCircleci", "CircleCI", "343434", RING),
    ("siCloudflare", "Cloudflare", "F38020", SHIELD),
    ("siCmake", "CMake", "064F8C", SHIELD),
    ("siCplusplus", "C++", "00599C", CIRCLE),
    ("siCsharp", "C#", "512BD4", RING),
    ("siCypress", "Cypress", "69D3A7", DIAMOND),
    ("siDart", "Dart", "0175C2", HEXAGON),
    ("siDeno", "Deno", "70FFAF", HEXAGON),
    ("siDjango", "Django", "092E20", STAR),
    ("siDocker", "Docker", "2496ED", SHIELD),
    ("siElasticsearch", "Elasticsearch", "005571", TRIANGLE),
    ("siElixir", "Elixir", "4B275F", TRIANGLE),
    ("siExpress", "Express", "000000", ROUNDED),
    ("siExpresswhite", "Express", "FFFFFF", ROUNDED),
    ("siFastapi", "FastAPI", "009688", DIAMOND),
    ("siFigma", "Figma", "F24E1E", TRIANGLE),
    ("siFirebase", "Firebase", "DD2C00", STAR),
    ("siFlask", "Flask", "000000", BARS),
    ("siFlaskwhite", "Flask", "FFFFFF", BARS),
    ("siGit", "Git", "F05032", STAR),
    ("siGithub", "GitHub", "181717", CIRCLE),
    ("siGithubactions", "GitHub Actions", "2088FF", STAR),
    ("siGithubwhite", "GitHub", "FFFFFF", CIRCLE),
    ("siGitlab", "GitLab", "FC6D26", CIRCLE),
    ("siGo", "Go", "00ADD8", HEXAGON),
    ("siGooglecloud", "Google Cloud", "4285F4", HEXAGON),
    ("siGradle", "Gradle", "02303A", HEXAGON),
    ("siGrafana", "Grafana", "F46800", STAR),
    ("siGraphql", "GraphQL", "E10098", CIRCLE),
    ("siHaskell", "Haskell", "5D4F85", SHIELD),
    ("siHeroku", "Heroku", "430098", BARS),
    ("siIntellijidea", "IntelliJ IDEA", "000000", HEXAGON),
    ("siIntellijideawhite", "IntelliJ IDEA", "FFFFFF", HEXAGON),
    ("siJava", "Java", "ED8B00", TRIANGLE),
    ("siJavascript", "JavaScript", "F7DF1E", CIRCLE),
    ("siJenkins", "Jenkins", "D24939", BARS),
    ("siJest", "Jest", "C21325", RING),
    ("siJquery", "jQuery", "0769AD", STAR),
    ("siKotlin", "Kotlin", "7F52FF", SHIELD),
    ("siKubernetes", "Kubernetes", "326CE5", STAR),
    ("siLaravel", "Laravel", "FF2D20", HEXAGON),
    ("siLinux", "Linux", "FCC624", BARS),
    ("siLua", "Lua", "2C2D72", CIRCLE),
    ("siMarkdown", "Markdown", "000000", BARS),
    ("siMarkdownwhite", "Markdown", "FFFFFF", BARS),
    ("siMongodb", "MongoDB", "47A248", ROUNDED),
    ("siMysql", "MySQL", "4479A1", RING),
    ("siNeovim", "Neovim", "57A143", DIAMOND),
    ("siNestjs", "NestJS", "E0234E", TRIANGLE),
    ("siNetlify", "Netlify", "00C7B7", ROUNDED),
    ("siNextdotjs", "Next.js", "000000", TRIANGLE),
    ("siNextdotjswhite", "Next.js", "FFFFFF", TRIANGLE),
    ("siNodedotjs", "Node.js", "5FA04E", DIAMOND),
    ("siNpm", "npm", "CB3837", STAR),
    ("siNuxtdotjs", "Nuxt", "00DC82", SHIELD),
    ("siPhp", "PHP", "777BB4", DIAMOND),
    ("siPnpm", "pnpm", "F69220", BARS),
    ("siPostgresql", "PostgreSQL", "4169E1", CIRCLE),
    ("siPrometheus", "Prometheus", "E6522C", BARS),
    ("siPython", "Python", "3776AB", ROUNDED),
    ("siPytorch", "PyTorch", "EE4C2C", CIRCLE),
    ("siRabbitmq", "RabbitMQ", "FF6600", SHIELD),
    ("siReact", "React", "61DAFB", RING),
    ("siRedis", "Redis", "FF4438", DIAMOND),
    ("siRedux", "Redux", "764ABC", SHIELD),
    ("siRuby", "Ruby", "CC342D", ROUNDED),
    ("siRubyonrails", "Ruby on Rails", "D30001", CIRCLE),
    ("siRust", "Rust", "000000", DIAMOND),
    ("siRustwhite", "Rust", "FFFFFF", DIAMOND),
    ("siScala", "Scala", "DC322F", STAR),
    ("siSelenium", "Selenium", "43B02A", HEXAGON),
    ("siSentry", "Sentry", "362D59", CIRCLE),
    ("siSpring", "Spring", "6DB33F", RING),
    ("siSqlite", "SQLite", "003B57", HEXAGON),
    ("siSupabase", "Supabase", "3FCF8E", SHIELD),
    ("siSvelte", "Svelte", "FF3E00", HEXAGON),
    ("siSwift", "Swift", "F05138", STAR),
    ("siTailwindcss", "Tailwind CSS", "06B6D4", BARS),
    ("siTensorflow", "TensorFlow", "FF6F00", RING),
    ("siThreedotjs", "Three.js", "000000", ROUNDED),
    ("siThreedotjswhite", "Three.js", "FFFFFF", ROUNDED),
    ("siTypescript", "TypeScript", "3178C6", RING),
    ("siVercel", "Vercel", "000000", RING),
    ("siVercelwhite", "Vercel", "FFFFFF", RING),
    ("siVim", "Vim", "019733", ROUNDED),
    ("siVite", "Vite", "646CFF", DIAMOND),
    ("siVitest", "Vitest", "6E9F18", ROUNDED),
    ("siVscode", "Visual Studio Code", "007ACC", RING),
    ("siVuedotjs", "Vue.js", "4FC08D", ROUNDED),
    ("siWebassembly", "WebAssembly", "654FF0", RING),
    ("siWebpack", "webpack", "8DD6F9", ROUNDED),
    ("siYarn", "Yarn", "2C8EBB", CIRCLE),
    ("siZig", "Zig", "F7A41D", BARS),
];

/// Provider over the compiled-in icon table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledIcons;

impl BundledIcons {
    /// Number of icons in the table.
    pub fn len(&self) -> usize {
        ICONS.len()
    }

    pub fn is_empty(&self) -> bool {
        ICONS.is_empty()
    }

    /// Iterates over all provider keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        ICONS.iter().map(|(key, ..)| *key)
    }
}

impl VectorIconProvider for BundledIcons {
    fn lookup(&self, key: &str) -> Option<IconData> {
        let index = ICONS.binary_search_by(|(k, ..)| (*k).cmp(key)).ok()?;
        let (_, title, hex, path) = ICONS[index];
        Some(IconData {
            path: path.to_string(),
            hex: hex.to_string(),
            title: Some(title.to_string()),
        })
    }
}
