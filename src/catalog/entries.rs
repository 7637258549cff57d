//! The bundled technology catalog.
//!
//! Grouped by category for readability; nothing depends on the order.

use super::{Category, TechEntry};

use Category::*;

pub(super) static ENTRIES: &[TechEntry] = &[
    // Language
    TechEntry::new("js", "JavaScript", Language, "simple-icons:javascript")
        .link("https://developer.mozilla.org/en-US/docs/Web/JavaScript")
        .aliases(&["javascript", "ecmascript"]),
    TechEntry::new("ts", "TypeScript", Language, "simple-icons:typescript")
        .link("https://www.typescriptlang.org")
        .aliases(&["typescript"]),
    TechEntry::new("py", "Python", Language, "simple-icons:python")
        .link("https://www.python.org")
        .aliases(&["python"]),
    TechEntry::new("rust", "Rust", Language, "simple-icons:rust")
        .dark("simple-icons:rust-white")
        .link("https://www.rust-lang.org")
        .aliases(&["rustlang"]),
    TechEntry::new("go", "Go", Language, "simple-icons:go")
        .link("https://go.dev")
        .aliases(&["golang"]),
    TechEntry::new("java", "Java", Language, "devicon:java")
        .link("https://dev.java")
        .aliases(&["jdk"]),
    TechEntry::new("kotlin", "Kotlin", Language, "simple-icons:kotlin")
        .link("https://kotlinlang.org"),
    TechEntry::new("swift", "Swift", Language, "simple-icons:swift")
        .link("https://www.swift.org"),
    TechEntry::new("c", "C", Language, "simple-icons:c"),
    TechEntry::new("cpp", "C++", Language, "simple-icons:cplusplus")
        .link("https://isocpp.org")
        .aliases(&["cplusplus"]),
    TechEntry::new("cs", "C#", Language, "simple-icons:csharp")
        .link("https://learn.microsoft.com/dotnet/csharp")
        .aliases(&["csharp"]),
    TechEntry::new("ruby", "Ruby", Language, "simple-icons:ruby")
        .link("https://www.ruby-lang.org"),
    TechEntry::new("php", "PHP", Language, "simple-icons:php")
        .link("https://www.php.net"),
    TechEntry::new("dart", "Dart", Language, "simple-icons:dart")
        .link("https://dart.dev"),
    TechEntry::new("elixir", "Elixir", Language, "simple-icons:elixir")
        .link("https://elixir-lang.org"),
    TechEntry::new("haskell", "Haskell", Language, "simple-icons:haskell")
        .link("https://www.haskell.org"),
    TechEntry::new("scala", "Scala", Language, "simple-icons:scala")
        .link("https://www.scala-lang.org"),
    TechEntry::new("zig", "Zig", Language, "simple-icons:zig")
        .link("https://ziglang.org"),
    TechEntry::new("lua", "Lua", Language, "simple-icons:lua"),
    // Framework
    TechEntry::new("react", "React", Framework, "simple-icons:react")
        .link("https://react.dev")
        .aliases(&["reactjs"]),
    TechEntry::new("vue", "Vue.js", Framework, "simple-icons:vuedotjs")
        .link("https://vuejs.org")
        .aliases(&["vuejs"]),
    TechEntry::new("angular", "Angular", Framework, "simple-icons:angular")
        .link("https://angular.dev"),
    TechEntry::new("svelte", "Svelte", Framework, "simple-icons:svelte")
        .link("https://svelte.dev"),
    TechEntry::new("nextjs", "Next.js", Framework, "simple-icons:nextdotjs")
        .dark("simple-icons:nextdotjs-white")
        .link("https://nextjs.org")
        .aliases(&["next"]),
    TechEntry::new("nuxtjs", "Nuxt", Framework, "simple-icons:nuxtdotjs")
        .link("https://nuxt.com")
        .aliases(&["nuxt"]),
    TechEntry::new("django", "Django", Framework, "simple-icons:django")
        .link("https://www.djangoproject.com"),
    TechEntry::new("flask", "Flask", Framework, "simple-icons:flask")
        .dark("simple-icons:flask-white")
        .link("https://flask.palletsprojects.com"),
    TechEntry::new("rails", "Ruby on Rails", Framework, "simple-icons:rubyonrails")
        .link("https://rubyonrails.org")
        .aliases(&["ror"]),
    TechEntry::new("spring", "Spring", Framework, "simple-icons:spring")
        .link("https://spring.io")
        .aliases(&["springboot"]),
    TechEntry::new("express", "Express", Framework, "simple-icons:express")
        .dark("simple-icons:express-white")
        .link("https://expressjs.com")
        .aliases(&["expressjs"]),
    TechEntry::new("fastapi", "FastAPI", Framework, "simple-icons:fastapi")
        .link("https://fastapi.tiangolo.com"),
    TechEntry::new("laravel", "Laravel", Framework, "simple-icons:laravel")
        .link("https://laravel.com"),
    TechEntry::new("nestjs", "NestJS", Framework, "simple-icons:nestjs")
        .link("https://nestjs.com"),
    // Library
    TechEntry::new("redux", "Redux", Library, "simple-icons:redux")
        .link("https://redux.js.org"),
    TechEntry::new("jquery", "jQuery", Library, "simple-icons:jquery")
        .link("https://jquery.com"),
    TechEntry::new("tailwind", "Tailwind CSS", Library, "simple-icons:tailwindcss")
        .link("https://tailwindcss.com")
        .aliases(&["tailwindcss"]),
    TechEntry::new("pytorch", "PyTorch", Library, "simple-icons:pytorch")
        .link("https://pytorch.org")
        .aliases(&["torch"]),
    TechEntry::new("tensorflow", "TensorFlow", Library, "simple-icons:tensorflow")
        .link("https://www.tensorflow.org"),
    TechEntry::new("threejs", "Three.js", Library, "simple-icons:threedotjs")
        .dark("simple-icons:threedotjs-white")
        .link("https://threejs.org")
        .aliases(&["three"]),
    // Platform
    TechEntry::new("nodejs", "Node.js", Platform, "simple-icons:nodedotjs")
        .link("https://nodejs.org")
        .aliases(&["node"]),
    TechEntry::new("deno", "Deno", Platform, "simple-icons:deno")
        .link("https://deno.com"),
    TechEntry::new("bun", "Bun", Platform, "simple-icons:bun")
        .link("https://bun.sh"),
    TechEntry::new("docker", "Docker", Platform, "simple-icons:docker")
        .link("https://www.docker.com"),
    TechEntry::new("kubernetes", "Kubernetes", Platform, "simple-icons:kubernetes")
        .link("https://kubernetes.io")
        .aliases(&["k8s"]),
    TechEntry::new("linux", "Linux", Platform, "simple-icons:linux"),
    TechEntry::new("github", "GitHub", Platform, "simple-icons:github")
        .dark("simple-icons:github-white")
        .link("https://github.com"),
    TechEntry::new("vercel", "Vercel", Platform, "simple-icons:vercel")
        .dark("simple-icons:vercel-white")
        .link("https://vercel.com"),
    TechEntry::new("netlify", "Netlify", Platform, "simple-icons:netlify")
        .link("https://www.netlify.com"),
    // Cloud
    TechEntry::new("aws", "Amazon Web Services", Cloud, "devicon:amazonwebservices")
        .link("https://aws.amazon.com")
        .aliases(&["amazon"]),
    TechEntry::new("gcp", "Google Cloud", Cloud, "simple-icons:googlecloud")
        .link("https://cloud.google.com")
        .aliases(&["googlecloud"]),
    TechEntry::new("azure", "Microsoft Azure", Cloud, "devicon:azure")
        .link("https://azure.microsoft.com"),
    TechEntry::new("cloudflare", "Cloudflare", Cloud, "simple-icons:cloudflare")
        .link("https://www.cloudflare.com"),
    TechEntry::new("firebase", "Firebase", Cloud, "simple-icons:firebase")
        .link("https://firebase.google.com"),
    TechEntry::new("heroku", "Heroku", Cloud, "devicon:heroku"),
    // Database
    TechEntry::new("postgres", "PostgreSQL", Database, "simple-icons:postgresql")
        .link("https://www.postgresql.org")
        .aliases(&["postgresql"]),
    TechEntry::new("mysql", "MySQL", Database, "simple-icons:mysql")
        .link("https://www.mysql.com"),
    TechEntry::new("mongodb", "MongoDB", Database, "simple-icons:mongodb")
        .link("https://www.mongodb.com")
        .aliases(&["mongo"]),
    TechEntry::new("redis", "Redis", Database, "simple-icons:redis")
        .link("https://redis.io"),
    TechEntry::new("sqlite", "SQLite", Database, "simple-icons:sqlite")
        .link("https://www.sqlite.org"),
    TechEntry::new("elasticsearch", "Elasticsearch", Database, "simple-icons:elasticsearch")
        .link("https://www.elastic.co/elasticsearch")
        .aliases(&["elastic"]),
    TechEntry::new("supabase", "Supabase", Database, "simple-icons:supabase")
        .link("https://supabase.com"),
    // CICD
    TechEntry::new("githubactions", "GitHub Actions", CICD, "simple-icons:githubactions")
        .link("https://github.com/features/actions")
        .aliases(&["actions"]),
    TechEntry::new("jenkins", "Jenkins", CICD, "simple-icons:jenkins")
        .link("https://www.jenkins.io"),
    TechEntry::new("gitlab", "GitLab", CICD, "simple-icons:gitlab")
        .link("https://gitlab.com"),
    TechEntry::new("circleci", "CircleCI", CICD, "simple-icons:circleci")
        .link("https://circleci.com"),
    // BuildTool
    TechEntry::new("webpack", "webpack", BuildTool, "simple-icons:webpack")
        .link("https://webpack.js.org"),
    TechEntry::new("vite", "Vite", BuildTool, "simple-icons:vite")
        .link("https://vite.dev")
        .aliases(&["vitejs"]),
    TechEntry::new("gradle", "Gradle", BuildTool, "simple-icons:gradle")
        .link("https://gradle.org"),
    TechEntry::new("maven", "Apache Maven", BuildTool, "simple-icons:apachemaven")
        .link("https://maven.apache.org"),
    TechEntry::new("cmake", "CMake", BuildTool, "simple-icons:cmake")
        .link("https://cmake.org"),
    TechEntry::new("npm", "npm", BuildTool, "simple-icons:npm")
        .link("https://www.npmjs.com"),
    TechEntry::new("pnpm", "pnpm", BuildTool, "simple-icons:pnpm")
        .link("https://pnpm.io"),
    TechEntry::new("yarn", "Yarn", BuildTool, "simple-icons:yarn")
        .link("https://yarnpkg.com"),
    // Testing
    TechEntry::new("jest", "Jest", Testing, "simple-icons:jest")
        .link("https://jestjs.io"),
    TechEntry::new("vitest", "Vitest", Testing, "simple-icons:vitest")
        .link("https://vitest.dev"),
    TechEntry::new("cypress", "Cypress", Testing, "simple-icons:cypress")
        .link("https://www.cypress.io"),
    TechEntry::new("selenium", "Selenium", Testing, "simple-icons:selenium")
        .link("https://www.selenium.dev"),
    // MessageQueue
    TechEntry::new("kafka", "Apache Kafka", MessageQueue, "simple-icons:apachekafka")
        .dark("simple-icons:apachekafka-white")
        .link("https://kafka.apache.org"),
    TechEntry::new("rabbitmq", "RabbitMQ", MessageQueue, "simple-icons:rabbitmq")
        .link("https://www.rabbitmq.com"),
    // Monitoring
    TechEntry::new("grafana", "Grafana", Monitoring, "simple-icons:grafana")
        .link("https://grafana.com"),
    TechEntry::new("prometheus", "Prometheus", Monitoring, "simple-icons:prometheus")
        .link("https://prometheus.io"),
    TechEntry::new("sentry", "Sentry", Monitoring, "simple-icons:sentry")
        .link("https://sentry.io"),
    // Editor
    TechEntry::new("vscode", "Visual Studio Code", Editor, "devicon:vscode")
        .link("https://code.visualstudio.com")
        .aliases(&["code"]),
    TechEntry::new("vim", "Vim", Editor, "simple-icons:vim")
        .link("https://www.vim.org"),
    TechEntry::new("neovim", "Neovim", Editor, "simple-icons:neovim")
        .link("https://neovim.io")
        .aliases(&["nvim"]),
    TechEntry::new("idea", "IntelliJ IDEA", Editor, "simple-icons:intellijidea")
        .dark("simple-icons:intellijidea-white")
        .link("https://www.jetbrains.com/idea")
        .aliases(&["intellij"]),
    // Design
    TechEntry::new("figma", "Figma", Design, "simple-icons:figma")
        .link("https://www.figma.com"),
    TechEntry::new("blender", "Blender", Design, "simple-icons:blender")
        .link("https://www.blender.org"),
    // Other
    TechEntry::new("git", "Git", Other, "simple-icons:git")
        .link("https://git-scm.com"),
    TechEntry::new("md", "Markdown", Other, "simple-icons:markdown")
        .dark("simple-icons:markdown-white")
        .aliases(&["markdown"]),
    TechEntry::new("graphql", "GraphQL", Other, "simple-icons:graphql")
        .link("https://graphql.org"),
    TechEntry::new("wasm", "WebAssembly", Other, "simple-icons:webassembly")
        .link("https://webassembly.org")
        .aliases(&["webassembly"]),
];
