//! Static slide content keyed by focusable-object index.

/// One image slot in a slide gallery. Slots without a source render as a
/// coloured placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSlot {
    pub description: &'static str,
    pub source: Option<&'static str>,
}

const fn slot(description: &'static str) -> ImageSlot {
    ImageSlot {
        description,
        source: None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
    pub images: &'static [ImageSlot],
}

/// Lookup from topic index to slide content.
#[derive(Clone, Copy, Debug)]
pub struct ContentTable {
    slides: &'static [Slide],
}

impl ContentTable {
    pub const fn new(slides: &'static [Slide]) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&'static Slide> {
        self.slides.get(index)
    }

    pub fn title(&self, index: usize) -> Option<&'static str> {
        self.slide(index).map(|s| s.title)
    }

    pub fn body(&self, index: usize) -> Option<&'static str> {
        self.slide(index).map(|s| s.body)
    }

    pub fn image_descriptions(&self, index: usize) -> Option<Vec<&'static str>> {
        self.slide(index)
            .map(|s| s.images.iter().map(|i| i.description).collect())
    }

    pub fn image_sources(&self, index: usize) -> Option<Vec<Option<&'static str>>> {
        self.slide(index)
            .map(|s| s.images.iter().map(|i| i.source).collect())
    }
}

/// Hue (degrees) of the placeholder swatch for image `image` of slide `slide`.
#[inline]
pub fn placeholder_hue(slide: usize, image: usize) -> u32 {
    ((slide * 50 + image * 30) % 360) as u32
}

/// CSS colour of a placeholder swatch.
pub fn placeholder_css(slide: usize, image: usize) -> String {
    format!("hsl({}, 70%, 50%)", placeholder_hue(slide, image))
}

pub static SPACE_DECK: ContentTable = ContentTable::new(&SPACE_SLIDES);
pub static CORRIDOR_DECK: ContentTable = ContentTable::new(&CORRIDOR_SLIDES);

static SPACE_SLIDES: [Slide; 8] = [
    Slide {
        title: "Background",
        body: "<ul>
    <li>Born and raised in Püssi, Estonia</li>
    <li>Studied electronics at university</li>
    <li>First exposure to programming: Java, C++, bash scripting</li>
    <li>Initially found programming difficult</li>
    <li>Completed master's degree</li>
    <li>Worked as a medical engineer for 10 years</li>
    <li>Moved to Finland with family</li>
</ul>",
        images: &[
            ImageSlot {
                description: "home, sweet home",
                source: Some("assets/images/slides/slide1/pussi.png"),
            },
            slot("First programming projects in Java and C++"),
            slot("Medical engineering workplace"),
            slot("Finland's tech landscape"),
        ],
    },
    Slide {
        title: "Motivation to Become a Programmer",
        body: "<ul>
    <li>Wanted a career change after 35</li>
    <li>Started with learning JavaScript in spare time</li>
    <li>Discovered Hive Helsinki (School 42 affiliate)</li>
    <li>Main motivation: ability to work remotely</li>
    <li>Other expectations:</li>
    <ul>
        <li>Working from tropical locations</li>
        <li>Being part of a large community</li>
        <li>Career growth opportunities</li>
        <li>Higher salary</li>
    </ul>
</ul>",
        images: &[
            slot("Remote work visualization"),
            slot("JavaScript learning resources"),
            slot("Hive Helsinki campus"),
            slot("Career transition planning"),
        ],
    },
    Slide {
        title: "Bootcamp Experience",
        body: "<ul>
    <li>Took 4 weeks off work for the selection process</li>
    <li>Learned C programming fundamentals</li>
    <li>Gained console skills</li>
    <li>Was accepted and became a full-time student</li>
    <li>Quit previous job to focus on studies</li>
</ul>",
        images: &[
            slot("Bootcamp collaborative environment"),
            slot("C programming exercises"),
            slot("Command line interface mastery"),
            slot("Bootcamp celebration"),
        ],
    },
    Slide {
        title: "Education at Hive",
        body: "<ul>
    <li>Challenging to study after 35 with family and two children</li>
    <li>Completed the program in 1 year and 3 months</li>
    <li>Project-based learning with gamification elements</li>
    <li>Peer review system for projects</li>
    <li>Four specialization paths: web, graphics, algorithms, computer programs</li>
    <li>Chose algorithms path (regretted not choosing web or graphics)</li>
    <li>Found coding immersive - entered \"flow state\" often</li>
</ul>",
        images: &[
            slot("Project-based learning approach"),
            slot("Peer review sessions"),
            slot("Different specialization paths diagram"),
            slot("Flow state coding session"),
        ],
    },
    Slide {
        title: "Job Search",
        body: "<ul>
    <li>First attempts were unsuccessful</li>
    <li>Started applying after 6 months of study</li>
    <li>Got some interviews but failed technical assignments</li>
    <li>Lacked practical knowledge in commercial technologies</li>
    <li>First job came after one year of study</li>
    <li>Hired at Tietoevry (largest outsourcing firm in Finland) as junior developer</li>
    <li>Project was canceled, but gained valuable experience in C# and Azure</li>
    <li>Found second job through employment office at a small family firm</li>
    <li>Worked on a medical CRM system for 6 months</li>
</ul>",
        images: &[
            slot("First job application process"),
            slot("Technical interview preparation"),
            slot("Tietoevry company headquarters"),
            slot("Medical CRM project visualization"),
        ],
    },
    Slide {
        title: "Current Work and Engineering Practices",
        body: "<ul>
    <li>Now works at a company with solid engineering practices:</li>
    <ul>
        <li>Multiple environments (development, test, production)</li>
        <li>Automated tests</li>
        <li>QA assistance</li>
        <li>Self-written tests for each feature</li>
        <li>GitLab workflow with code reviews</li>
        <li>Design documentation for features</li>
        <li>Daily team meetings</li>
        <li>Bi-weekly project demos</li>
    </ul>
    <li>Recent project: dynamic form rendering (took 2 months)</li>
</ul>",
        images: &[
            slot("Development environment setup"),
            slot("Automated testing workflow"),
            slot("GitLab code review process"),
            slot("Dynamic form rendering project"),
        ],
    },
    Slide {
        title: "Advice for Aspiring Programmers",
        body: "<ul>
    <li>Practice code reviews and effective communication</li>
    <li>Learn thorough testing</li>
    <li>Master Git</li>
    <li>Design before coding: sketch, pseudocode</li>
    <li>Communicate with colleagues</li>
    <li>Show independence in problem-solving but ask questions</li>
    <li>Look for team leads who were former engineers/QA</li>
    <li>Be cautious of managers who don't understand the product</li>
</ul>",
        images: &[
            slot("Code review best practices"),
            slot("Testing methodology diagram"),
            slot("Git branching strategy"),
            slot("Team communication structure"),
        ],
    },
    Slide {
        title: "Conclusions",
        body: "<ul>
    <li>Has been working as a programmer for 2.5 years</li>
    <li>Enjoys seeing results of his work</li>
    <li>Appreciates the problem-solving aspects</li>
    <li>Works on side projects (Telegram job search bot, AI media content chat)</li>
    <li>Constantly learning new technologies</li>
    <li>Reality check:</li>
    <ul>
        <li>Remote work expectations not met</li>
        <li>No tropical locations</li>
        <li>Satisfied with salary</li>
        <li>Not worried about AI taking his job</li>
    </ul>
</ul>",
        images: &[
            slot("Career progress timeline"),
            slot("Telegram bot project screenshot"),
            slot("AI media content chat interface"),
            slot("Work-life balance reality"),
        ],
    },
];

const DOOR_PLACEHOLDER: &str = "<p>Slide content will be added later</p>";

static CORRIDOR_SLIDES: [Slide; 8] = [
    door("Introduction"),
    door("Background"),
    door("Problem Statement"),
    door("Methodology"),
    door("Results"),
    door("Discussion"),
    door("Conclusion"),
    door("Future Work"),
];

const fn door(title: &'static str) -> Slide {
    Slide {
        title,
        body: DOOR_PLACEHOLDER,
        images: &[],
    }
}
