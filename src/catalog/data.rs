//! Seeded catalog content: notes, quizzes and flashcard decks.
//!
//! The markup in the notes entries is authored here and trusted; the only
//! user-controlled text that reaches markup is the fallback topic, which is
//! escaped before interpolation.

use html_escape::encode_text;

use super::models::{NotesEntry, QuizEntry, StudyNotes};
use crate::flashcards::{Flashcard, FlashcardDeck};
use crate::quiz::QuizQuestion;

pub(super) fn notes_entries() -> Vec<NotesEntry> {
    vec![
        NotesEntry {
            key: "photosynthesis",
            title: "Photosynthesis",
            content_html: r#"<h3>📚 Definition</h3>
<p>Photosynthesis is the process by which plants convert light energy into chemical energy (glucose) using carbon dioxide and water.</p>
<h3>🧪 Chemical Equation</h3>
<p><strong>6CO₂ + 6H₂O + light energy → C₆H₁₂O₆ + 6O₂</strong></p>
<h3>🔬 Key Components</h3>
<ul>
<li><strong>Chlorophyll:</strong> Green pigment that captures light energy</li>
<li><strong>Chloroplasts:</strong> Cell organelles where photosynthesis occurs</li>
<li><strong>Stomata:</strong> Pores that allow gas exchange</li>
</ul>
<h3>⚡ Two Main Stages</h3>
<ol>
<li><strong>Light Reactions:</strong> Convert light energy to chemical energy (ATP and NADPH)</li>
<li><strong>Calvin Cycle:</strong> Use ATP and NADPH to fix carbon dioxide into glucose</li>
</ol>
<h3>🌱 Importance</h3>
<p>Photosynthesis is crucial for life on Earth as it produces oxygen and forms the base of most food chains.</p>"#,
        },
        NotesEntry {
            key: "world war 2",
            title: "World War II",
            content_html: r#"<h3>📅 Timeline (1939-1945)</h3>
<p>World War II was a global conflict that involved most of the world's nations.</p>
<h3>🌍 Major Theaters</h3>
<ul>
<li><strong>European Theater:</strong> Germany vs. Allied forces</li>
<li><strong>Pacific Theater:</strong> Japan vs. Allied forces</li>
<li><strong>African Theater:</strong> North African campaign</li>
</ul>
<h3>⚔️ Key Events</h3>
<ol>
<li><strong>1939:</strong> Germany invades Poland, war begins</li>
<li><strong>1941:</strong> Pearl Harbor attack, US enters war</li>
<li><strong>1942:</strong> Battle of Stalingrad begins</li>
<li><strong>1944:</strong> D-Day invasion of Normandy</li>
<li><strong>1945:</strong> Germany surrenders, atomic bombs dropped, Japan surrenders</li>
</ol>
<h3>🤝 Major Alliances</h3>
<ul>
<li><strong>Axis Powers:</strong> Germany, Italy, Japan</li>
<li><strong>Allied Powers:</strong> UK, USSR, USA, France, China</li>
</ul>
<h3>💭 Consequences</h3>
<p>The war resulted in significant political changes, the establishment of the UN, and the beginning of the Cold War.</p>"#,
        },
        NotesEntry {
            key: "calculus",
            title: "Introduction to Calculus",
            content_html: r#"<h3>📊 What is Calculus?</h3>
<p>Calculus is the mathematical study of continuous change, dealing with derivatives and integrals.</p>
<h3>🧮 Two Main Branches</h3>
<ul>
<li><strong>Differential Calculus:</strong> Studies rates of change (derivatives)</li>
<li><strong>Integral Calculus:</strong> Studies accumulation of quantities (integrals)</li>
</ul>
<h3>📈 Key Concepts</h3>
<ol>
<li><strong>Limits:</strong> The foundation of calculus</li>
<li><strong>Derivatives:</strong> Rate of change at a point</li>
<li><strong>Integrals:</strong> Area under a curve</li>
<li><strong>Fundamental Theorem:</strong> Links derivatives and integrals</li>
</ol>
<h3>🔧 Applications</h3>
<ul>
<li>Physics: Motion, force, energy</li>
<li>Engineering: Optimization problems</li>
<li>Economics: Marginal analysis</li>
<li>Biology: Population growth models</li>
</ul>
<h3>💡 Important Formulas</h3>
<p><strong>Power Rule:</strong> d/dx(xⁿ) = nxⁿ⁻¹</p>
<p><strong>Chain Rule:</strong> d/dx[f(g(x))] = f'(g(x)) · g'(x)</p>"#,
        },
    ]
}

/// Generic study notes for topics without a catalog entry. The topic is user
/// text and must be escaped before it enters markup.
pub(super) fn generic_notes(topic: &str) -> StudyNotes {
    let safe_topic = encode_text(topic);
    StudyNotes {
        title: safe_topic.to_string(),
        content_html: format!(
            r#"<h3>📚 Study Notes for {safe_topic}</h3>
<p>Here are comprehensive study notes generated for your topic.</p>
<h3>🎯 Key Points</h3>
<ul>
<li>Understand the fundamental concepts and definitions</li>
<li>Learn the historical context and development</li>
<li>Master the practical applications</li>
<li>Practice problem-solving techniques</li>
</ul>
<h3>📖 Study Strategy</h3>
<ol>
<li>Read through the material carefully</li>
<li>Take notes on important concepts</li>
<li>Create flashcards for key terms</li>
<li>Practice with examples and exercises</li>
<li>Review regularly to reinforce learning</li>
</ol>
<h3>💡 Pro Tips</h3>
<p>Use active recall techniques, spaced repetition, and teach concepts to others to improve retention.</p>"#
        ),
    }
}

pub(super) fn quiz_entries() -> Vec<QuizEntry> {
    vec![
        QuizEntry {
            key: "biology",
            questions: vec![
                QuizQuestion::new(
                    "What is the powerhouse of the cell?",
                    ["Nucleus", "Mitochondria", "Ribosome", "Endoplasmic Reticulum"],
                    1,
                ),
                QuizQuestion::new(
                    "Which molecule carries genetic information?",
                    ["RNA", "DNA", "Protein", "Lipid"],
                    1,
                ),
                QuizQuestion::new(
                    "What process do plants use to make food?",
                    ["Respiration", "Photosynthesis", "Digestion", "Transpiration"],
                    1,
                ),
                QuizQuestion::new(
                    "How many chambers does a human heart have?",
                    ["2", "3", "4", "5"],
                    2,
                ),
                QuizQuestion::new(
                    "What is the basic unit of life?",
                    ["Atom", "Molecule", "Cell", "Tissue"],
                    2,
                ),
            ],
        },
        QuizEntry {
            key: "history",
            questions: vec![
                QuizQuestion::new(
                    "In which year did World War II end?",
                    ["1944", "1945", "1946", "1947"],
                    1,
                ),
                QuizQuestion::new(
                    "Who was the first President of the United States?",
                    ["Thomas Jefferson", "John Adams", "George Washington", "Benjamin Franklin"],
                    2,
                ),
                QuizQuestion::new(
                    "Which empire was ruled by Julius Caesar?",
                    ["Greek Empire", "Roman Empire", "Byzantine Empire", "Ottoman Empire"],
                    1,
                ),
                QuizQuestion::new(
                    "When did the Berlin Wall fall?",
                    ["1987", "1988", "1989", "1990"],
                    2,
                ),
                QuizQuestion::new(
                    "Who painted the Sistine Chapel ceiling?",
                    ["Leonardo da Vinci", "Raphael", "Michelangelo", "Donatello"],
                    2,
                ),
            ],
        },
        QuizEntry {
            key: "mathematics",
            questions: vec![
                QuizQuestion::new(
                    "What is the value of π (pi) to two decimal places?",
                    ["3.14", "3.15", "3.16", "3.17"],
                    0,
                ),
                QuizQuestion::new(
                    "What is the square root of 144?",
                    ["11", "12", "13", "14"],
                    1,
                ),
                QuizQuestion::new(
                    "In algebra, what does 'x' typically represent?",
                    ["A constant", "A variable", "A coefficient", "An operation"],
                    1,
                ),
                QuizQuestion::new(
                    "What is 15% of 200?",
                    ["25", "30", "35", "40"],
                    1,
                ),
                QuizQuestion::new(
                    "What type of angle measures exactly 90 degrees?",
                    ["Acute", "Right", "Obtuse", "Straight"],
                    1,
                ),
            ],
        },
    ]
}

/// Generic five-question quiz for subjects without a catalog entry. Prompts
/// are plain text; surfaces that render them into markup escape them there.
pub(super) fn generic_quiz(subject: &str) -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            format!("What is a key concept in {subject}?"),
            ["Fundamental principles", "Basic theories", "Core methodologies", "All of the above"],
            3,
        ),
        QuizQuestion::new(
            format!("Which skill is most important when studying {subject}?"),
            ["Memorization", "Critical thinking", "Pattern recognition", "All of the above"],
            3,
        ),
        QuizQuestion::new(
            format!("How can you best improve in {subject}?"),
            ["Regular practice", "Reading extensively", "Seeking help when needed", "All of the above"],
            3,
        ),
        QuizQuestion::new(
            format!("What resource is most helpful for {subject}?"),
            ["Textbooks", "Online tutorials", "Practice exercises", "All of the above"],
            3,
        ),
        QuizQuestion::new(
            format!("What mindset helps most with {subject}?"),
            ["Growth mindset", "Fixed mindset", "Perfectionist mindset", "Competitive mindset"],
            0,
        ),
    ]
}

pub(super) fn deck_entries() -> Vec<FlashcardDeck> {
    vec![
        FlashcardDeck {
            key: "science".to_string(),
            name: "Science Basics".to_string(),
            cards: vec![
                Flashcard::new("What is the chemical symbol for water?", "H₂O"),
                Flashcard::new("What force keeps us on Earth?", "Gravity"),
                Flashcard::new("What is the center of an atom called?", "Nucleus"),
                Flashcard::new(
                    "What gas do plants absorb from the atmosphere?",
                    "Carbon dioxide (CO₂)",
                ),
                Flashcard::new("What is the hardest natural substance?", "Diamond"),
                Flashcard::new("What is the speed of light?", "299,792,458 meters per second"),
                Flashcard::new("What planet is known as the Red Planet?", "Mars"),
                Flashcard::new(
                    "What is the most abundant gas in Earth's atmosphere?",
                    "Nitrogen",
                ),
                Flashcard::new(
                    "What type of bond holds water molecules together?",
                    "Hydrogen bonds",
                ),
                Flashcard::new(
                    "What is the process of converting liquid to gas called?",
                    "Evaporation",
                ),
            ],
        },
        FlashcardDeck {
            key: "history".to_string(),
            name: "World History".to_string(),
            cards: vec![
                Flashcard::new("When did the American Civil War begin?", "1861"),
                Flashcard::new("Who was the first person to walk on the moon?", "Neil Armstrong"),
                Flashcard::new("In which year did the Titanic sink?", "1912"),
                Flashcard::new("Who was the first woman to win a Nobel Prize?", "Marie Curie"),
                Flashcard::new("What year did the Berlin Wall fall?", "1989"),
                Flashcard::new("Who wrote the Declaration of Independence?", "Thomas Jefferson"),
                Flashcard::new(
                    "Which war was fought between the North and South in America?",
                    "The Civil War",
                ),
                Flashcard::new(
                    "Who was the first President of the United States?",
                    "George Washington",
                ),
                Flashcard::new("In which year did World War I begin?", "1914"),
                Flashcard::new("Who was known as the Iron Lady?", "Margaret Thatcher"),
            ],
        },
        FlashcardDeck {
            key: "math".to_string(),
            name: "Mathematics".to_string(),
            cards: vec![
                Flashcard::new("What is 15 × 8?", "120"),
                Flashcard::new("What is the value of π to 3 decimal places?", "3.142"),
                Flashcard::new("What is the square root of 64?", "8"),
                Flashcard::new("What is 25% of 80?", "20"),
                Flashcard::new(
                    "What is the area of a circle with radius 5?",
                    "25π or approximately 78.54",
                ),
                Flashcard::new("What is 7!?", "5,040"),
                Flashcard::new("What is the sum of angles in a triangle?", "180 degrees"),
                Flashcard::new("What is the derivative of x²?", "2x"),
                Flashcard::new("What is the Pythagorean theorem?", "a² + b² = c²"),
                Flashcard::new(
                    "What is the quadratic formula?",
                    "x = (-b ± √(b²-4ac)) / 2a",
                ),
            ],
        },
        FlashcardDeck {
            key: "literature".to_string(),
            name: "Literature".to_string(),
            cards: vec![
                Flashcard::new("Who wrote 'Romeo and Juliet'?", "William Shakespeare"),
                Flashcard::new(
                    "What is the first book in the Harry Potter series?",
                    "Harry Potter and the Philosopher's Stone",
                ),
                Flashcard::new("Who wrote '1984'?", "George Orwell"),
                Flashcard::new(
                    "What is the opening line of 'Pride and Prejudice'?",
                    "It is a truth universally acknowledged...",
                ),
                Flashcard::new("Who wrote 'To Kill a Mockingbird'?", "Harper Lee"),
                Flashcard::new(
                    "What is a haiku?",
                    "A Japanese poem with 3 lines (5-7-5 syllables)",
                ),
                Flashcard::new("Who wrote 'The Great Gatsby'?", "F. Scott Fitzgerald"),
                Flashcard::new(
                    "What is an allegory?",
                    "A story with hidden meaning or symbolism",
                ),
                Flashcard::new("Who wrote 'Jane Eyre'?", "Charlotte Brontë"),
                Flashcard::new(
                    "What is iambic pentameter?",
                    "A rhythmic pattern of 10 syllables per line",
                ),
            ],
        },
    ]
}
