use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPage {
    pub page: usize,
    pub title: &'static str,
    pub content: &'static str,
}

const fn page(page: usize, title: &'static str, content: &'static str) -> DocumentPage {
    DocumentPage {
        page,
        title,
        content,
    }
}

/// The fixed demo document shown by the viewer.
pub static SAMPLE_DOCUMENT: [DocumentPage; 10] = [
    page(
        1,
        "Introduction to React.js",
        "React is a JavaScript library for building user interfaces. It lets you create reusable UI components and manage state efficiently.\n\nKey Features:\n• Component-based architecture\n• Virtual DOM for performance\n• One-way data flow\n• Rich ecosystem and community",
    ),
    page(
        2,
        "Components and Props",
        "Components let you split the UI into independent, reusable pieces. Think of components as JavaScript functions.\n\nProps are inputs to components. They are passed down from parent components and are read-only.",
    ),
    page(
        3,
        "State and Lifecycle",
        "State allows React components to change their output over time in response to user actions, network responses, and anything else.\n\nLifecycle methods let you run code at specific points in a component's lifetime.",
    ),
    page(
        4,
        "Hooks",
        "Hooks let you use state and other React features without writing a class. They are functions that let you 'hook into' React state and lifecycle features.\n\nCommon Hooks:\n• useState\n• useEffect\n• useContext\n• useReducer",
    ),
    page(
        5,
        "Tailwind CSS",
        "Tailwind CSS is a utility-first CSS framework for rapid UI development. Unlike other frameworks, it doesn't have pre-designed components.\n\nBenefits:\n• Faster development\n• Consistent design\n• Highly customizable\n• No unused CSS",
    ),
    page(
        6,
        "PDF Viewer Implementation",
        "This PDF viewer demonstrates how to build a document reader with React and Tailwind CSS. It includes features like search, bookmarks, and zoom controls.\n\nThe viewer uses a clean white and blue theme for better readability.",
    ),
    page(
        7,
        "Advanced Features",
        "Advanced features include full-text search, bookmark management, zoom controls, and responsive design.\n\nThese features enhance the user experience and make document reading more efficient.",
    ),
    page(
        8,
        "Performance Optimization",
        "Learn how to optimize your React applications for better performance. Techniques include code splitting, memoization, and efficient re-renders.\n\nPerformance is crucial for large documents and complex applications.",
    ),
    page(
        9,
        "Best Practices",
        "Follow these best practices for better code quality and maintainability:\n\n• Keep components small and focused\n• Use meaningful variable names\n• Implement proper error handling\n• Write comprehensive tests",
    ),
    page(
        10,
        "Conclusion",
        "Thank you for viewing this PDF demonstration. This viewer showcases modern web development techniques with React and Tailwind CSS.\n\nFeel free to explore all the features and see how they work together.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct DocumentViewer {
    pages: &'static [DocumentPage],
    current_page: usize,
    zoom: u16,
    results: Vec<usize>,
    result_cursor: usize,
    bookmarks: Vec<usize>,
}

impl Default for DocumentViewer {
    fn default() -> Self {
        Self::new(&SAMPLE_DOCUMENT)
    }
}

impl DocumentViewer {
    pub const MIN_ZOOM: u16 = 50;
    pub const MAX_ZOOM: u16 = 200;
    pub const ZOOM_STEP: u16 = 25;

    pub fn new(pages: &'static [DocumentPage]) -> Self {
        Self {
            pages,
            current_page: 1,
            zoom: 100,
            results: Vec::new(),
            result_cursor: 0,
            bookmarks: Vec::new(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_number(&self) -> usize {
        self.current_page
    }

    pub fn current_page(&self) -> Option<&DocumentPage> {
        self.pages.iter().find(|p| p.page == self.current_page)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + Self::ZOOM_STEP).min(Self::MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(Self::ZOOM_STEP).max(Self::MIN_ZOOM);
    }

    /// Case-insensitive match against each page's title and content.
    /// Jumps to the first hit. A blank term clears the results.
    pub fn search(&mut self, term: &str) -> Vec<&'static DocumentPage> {
        self.result_cursor = 0;
        if term.trim().is_empty() {
            self.results.clear();
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.results = self
            .pages
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle) || p.content.to_lowercase().contains(&needle)
            })
            .map(|p| p.page)
            .collect();
        debug!(term, hits = self.results.len(), "Document search");

        if let Some(&first) = self.results.first() {
            self.current_page = first;
        }
        self.search_results()
    }

    pub fn search_results(&self) -> Vec<&'static DocumentPage> {
        let pages = self.pages;
        self.results
            .iter()
            .filter_map(|n| pages.iter().find(|p| p.page == *n))
            .collect()
    }

    pub fn navigate_results(&mut self, direction: SearchDirection) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.result_cursor = match direction {
            SearchDirection::Next => (self.result_cursor + 1) % len,
            SearchDirection::Previous => (self.result_cursor + len - 1) % len,
        };
        self.current_page = self.results[self.result_cursor];
    }

    pub fn clear_search(&mut self) {
        self.results.clear();
        self.result_cursor = 0;
    }

    pub fn toggle_bookmark(&mut self) {
        if let Some(pos) = self.bookmarks.iter().position(|p| *p == self.current_page) {
            self.bookmarks.remove(pos);
        } else {
            self.bookmarks.push(self.current_page);
        }
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarks.contains(&self.current_page)
    }

    pub fn bookmarks(&self) -> &[usize] {
        &self.bookmarks
    }
}
