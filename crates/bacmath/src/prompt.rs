//! Instruction prompts for the four tutoring endpoints.
//!
//! Every prompt is plain French text. [`PromptBuilder`] assembles the
//! multi-part prompts (tutor context, LaTeX rules) so optional context can be
//! left out without leaving empty headings behind.

use std::str::FromStr;

/// Exercise difficulty requested by the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Qualitative instruction appended to the exercise prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Difficulty::Easy => "Les exercices doivent être simples, directs et courts.",
            Difficulty::Medium => {
                "Les exercices doivent être de niveau Bac standard avec raisonnement modéré."
            }
            Difficulty::Hard => {
                "Les exercices doivent être difficiles, avec raisonnement avancé et calculs plus complexes."
            }
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// Instruction fragment for a raw difficulty level. Unknown levels yield an
/// empty fragment.
pub fn difficulty_instruction(level: &str) -> &'static str {
    level
        .parse::<Difficulty>()
        .map(Difficulty::instruction)
        .unwrap_or("")
}

const LATEX_RULES: &str = "\
- Toutes les expressions mathématiques doivent être entre $...$ ou $$...$$.
- N'écris JAMAIS un symbole mathématique en dehors de $...$.
- Écris toujours les limites comme : $x \\to 0$.
- N'utilise jamais ^ ou _ sans accolades {}.
- Utilise un LaTeX correct.";

/// Builder for prompts made of a preamble and optional titled blocks.
///
/// Blocks are joined with blank lines. Empty blocks are skipped.
pub struct PromptBuilder {
    parts: Vec<String>,
}

impl PromptBuilder {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            parts: vec![preamble.into()],
        }
    }

    /// Append a block introduced by `title` followed by a colon.
    pub fn section(mut self, title: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.parts.push(format!("{title} :\n{content}"));
        }
        self
    }

    /// Append a titled block only if the content is `Some`.
    pub fn section_opt(self, title: &str, content: Option<impl Into<String>>) -> Self {
        match content {
            Some(c) => self.section(title, c),
            None => self,
        }
    }

    /// Append text without a title.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.parts.push(content);
        }
        self
    }

    pub fn build(self) -> String {
        self.parts.join("\n\n")
    }
}

/// Prompt asking for exactly three exercises on one lesson.
pub fn exercise_prompt(section: &str, lesson: &str, level: &str) -> String {
    let rules = format!(
        "- Tout le texte doit être en français.\n{LATEX_RULES}\n\
         - Aucun texte avant Question 1.\n\
         - Aucun texte après Question 3."
    );
    PromptBuilder::new(format!(
        "Tu es un expert en mathématiques du Baccalauréat tunisien pour la section {section}."
    ))
    .raw(
        format!(
            "Niveau demandé : {}.\n{}",
            level.to_uppercase(),
            difficulty_instruction(level)
        )
        .trim_end()
        .to_string(),
    )
    .raw(format!(
        "Génère exactement 3 exercices strictement sur la leçon '{lesson}'."
    ))
    .section("RÈGLES OBLIGATOIRES", rules)
    .section(
        "Format EXACTEMENT",
        "\nQuestion 1:\n...\n\nQuestion 2:\n...\n\nQuestion 3:\n...",
    )
    .build()
}

/// Prompt for a detailed step-by-step correction of a student's exercise.
pub fn solution_prompt() -> String {
    "\
Donne une correction détaillée étape par étape.
Le texte explicatif ne doit JAMAIS être dans $...$.
Seules les expressions mathématiques doivent être entre $...$ ou $$...$$.
Explique en français clair avec des phrases normales.
- N'utilise jamais ^ ou _ sans accolades {}."
        .to_string()
}

/// Optional context the tutor is grounded in.
#[derive(Debug, Clone, Default)]
pub struct TutorContext<'a> {
    pub section: Option<&'a str>,
    pub lesson: Option<&'a str>,
    pub difficulty: Option<&'a str>,
    /// Exercise statements the student is currently working on.
    pub questions: &'a [String],
}

/// Prompt for the interactive tutor.
pub fn tutor_prompt(ctx: &TutorContext<'_>) -> String {
    let questions = if ctx.questions.is_empty() {
        None
    } else {
        Some(
            ctx.questions
                .iter()
                .enumerate()
                .map(|(i, q)| format!("Question {}:\n{}", i + 1, q.trim()))
                .collect::<Vec<_>>()
                .join("\n\n"),
        )
    };

    PromptBuilder::new(
        "Tu es un professeur particulier de mathématiques qui prépare un élève \
         au Baccalauréat tunisien. Tu réponds toujours en français.",
    )
    .section_opt("Section", ctx.section)
    .section_opt("Leçon", ctx.lesson)
    .section_opt("Niveau", ctx.difficulty.map(str::to_uppercase))
    .section_opt("Exercices en cours", questions)
    .section(
        "Méthode",
        "- Guide l'élève avec des indices et des questions plutôt que de donner \
         directement la solution complète, sauf s'il la demande explicitement.\n\
         - Vérifie les calculs de l'élève et signale précisément les erreurs.\n\
         - Reste dans le programme du Bac et sois concis.",
    )
    .section("Règles d'écriture", LATEX_RULES)
    .build()
}

/// Prompt for a full lesson exposition.
pub fn lesson_prompt(section: &str, lesson: &str) -> String {
    PromptBuilder::new(format!(
        "Tu es un professeur de mathématiques du Baccalauréat tunisien pour la section {section}."
    ))
    .raw(format!(
        "Rédige un cours complet et structuré sur la leçon '{lesson}', conforme au programme officiel."
    ))
    .section(
        "Plan obligatoire",
        "1. Définitions\n\
         2. Propriétés et théorèmes (avec les conditions d'application)\n\
         3. Méthodes à connaître\n\
         4. Exemples corrigés\n\
         5. Erreurs fréquentes à éviter",
    )
    .section(
        "RÈGLES OBLIGATOIRES",
        format!("- Tout le texte doit être en français.\n{LATEX_RULES}"),
    )
    .build()
}
