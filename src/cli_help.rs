//! Long help text constants for CLI subcommands.

/// Whole-build analysis: scores, balance checks and workloads.
pub const ANALYZE: &str = "\
Score a complete build and print a whole-system verdict.

Each category is scored 0-100 and graded S/A/B/C/D/F:
  S >= 85   A >= 75   B >= 60   C >= 45   D >= 30   F below 30

Overall score weights:
  CPU 25%   GPU 25%   Memory 20%   Storage 15%   Power Supply 15%

The report also checks CPU/GPU balance (bottleneck), flags budget spent where
it buys little (oversized RAM or PSU, CPU far ahead of the GPU), and lists the
workloads the build suits.

Build files are TOML or JSON. Each slot (cpu, gpu, memory, storage,
power_supply) holds either an inline component or a catalog id:

  cpu = \"r5-7600\"

  [gpu]
  name = \"GeForce RTX 4070\"
  specs = { memory = \"12 GB\", boost_clock = \"2475 MHz\", tdp = 200 }

Examples:
  rigcheck analyze build.toml
  rigcheck analyze build.toml --catalog parts.toml
  rigcheck analyze build.json --json";

/// Single-component scoring.
pub const COMPONENT: &str = "\
Score one component file on its own.

The file holds a single component (name and specs). A power supply scored
this way is judged against the fixed 100 W system overhead only, since no
CPU or GPU is known.

Examples:
  rigcheck component gpu rtx4070.toml
  rigcheck component psu rm750e.json --json";

/// LLM review on top of the deterministic report.
pub const ADVISE: &str = "\
Analyze a build, then ask an AI model to review it.

The deterministic report is printed first. The model receives the build and
that report and replies with a summary, strengths, weaknesses and
suggestions. Its answer never changes any score.

Supported providers:
  claude  Anthropic Claude (requires ANTHROPIC_API_KEY env var)

Examples:
  rigcheck advise build.toml
  rigcheck advise build.toml --catalog parts.toml --output review.txt
  rigcheck advise build.toml --model claude-sonnet-4-5-20250929";
