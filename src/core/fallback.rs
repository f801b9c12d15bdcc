use crate::types::{ProjectId, ProjectRecord};

fn project(
    id: u64,
    title: &str,
    slug: &str,
    tags: &[&str],
    description: &str,
    github: Option<&str>,
    featured: bool,
    content: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::Number(id),
        title: title.to_string(),
        slug: slug.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        description: description.to_string(),
        is_private: github.is_none(),
        github: github.map(str::to_string),
        featured,
        content: Some(content.to_string()),
    }
}

/// Records bundled with the binary, used when neither the API nor the
/// dataset can answer.
pub fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            1,
            "AI File Organizer",
            "ai-file-organizer",
            &["Python", "Flask"],
            "Organizes codebases for Claude AI analysis.",
            Some("https://github.com/samscho98/ai-organizer"),
            true,
            "# AI File Organizer\n\n\
             This project helps developers organize their codebases for AI analysis. \
             It automatically scans through your project directories, identifies key \
             components, and generates a structured representation that makes it easier \
             for AI assistants to understand your codebase.\n\n\
             ## Features\n\n\
             - Automatic file organization\n\
             - Code structure analysis\n\
             - Intelligent categorization\n\
             - Integration with Claude AI\n\n\
             ## Technical Details\n\n\
             Built with Python and Flask, the application uses advanced text processing \
             algorithms to parse and organize code files.",
        ),
        project(
            2,
            "E-Commerce Dashboard",
            "ecommerce-dashboard",
            &["React", "Node.js", "MongoDB"],
            "Analytics dashboard for online retail stores.",
            Some("https://github.com/samscho98/ecommerce-dashboard"),
            true,
            "# E-Commerce Dashboard\n\n\
             A comprehensive analytics solution for online retail businesses. This \
             dashboard provides real-time insights into sales, customer behavior, and \
             inventory management.\n\n\
             ## Features\n\n\
             - Real-time sales tracking\n\
             - Customer behavior analysis\n\
             - Inventory management\n\
             - Customizable reports\n\n\
             ## Technical Details\n\n\
             Built with a React frontend, Node.js backend, and MongoDB for data storage. \
             Uses Chart.js for data visualization.",
        ),
        project(
            3,
            "Portfolio Website",
            "portfolio-website",
            &["React", "Flask", "Tailwind CSS"],
            "My personal portfolio website with dark mode support.",
            Some("https://github.com/samscho98/portfolio-website"),
            true,
            "# Portfolio Website\n\n\
             This project is my personal portfolio website, designed to showcase my work \
             and skills as a developer. It features a clean, responsive design with dark \
             mode support.\n\n\
             ## Features\n\n\
             - Responsive Design\n\
             - Dark Mode Support\n\
             - Project Showcase\n\
             - Contact Form\n\n\
             ## Technical Details\n\n\
             The portfolio uses React for the frontend and Flask for the backend API. The \
             site is deployed on Render.com.",
        ),
        project(
            4,
            "Task Management API",
            "task-management-api",
            &["Python", "Flask", "PostgreSQL"],
            "RESTful API for task management applications.",
            Some("https://github.com/samscho98/task-api"),
            false,
            "# Task Management API\n\n\
             A robust RESTful API built for task management applications, providing \
             endpoints for task creation, organization, assignment, and team \
             collaboration.\n\n\
             ## Features\n\n\
             - User Authentication\n\
             - Task Management\n\
             - Task Organization\n\
             - Team Collaboration\n\n\
             ## Technical Details\n\n\
             Built with Python Flask and PostgreSQL, this API follows RESTful principles \
             and incorporates modern authentication practices.",
        ),
        project(
            5,
            "Client CRM System",
            "client-crm",
            &["React", "PostgreSQL", "Express"],
            "Custom CRM solution for a marketing agency.",
            None,
            false,
            "# Client CRM System\n\n\
             A private project developed for a marketing agency to manage their client \
             relationships, campaigns, and analytics in one place.\n\n\
             *This is a private client project. Detailed write-up available upon \
             request.*\n\n\
             ## My Contribution\n\n\
             I designed and implemented the full-stack solution, including:\n\n\
             - Client database architecture\n\
             - Campaign management tools\n\
             - Reporting and analytics dashboard\n\
             - Integration with existing marketing tools\n\n\
             ## Technologies Used\n\n\
             React, PostgreSQL, Express, and various marketing APIs for integration \
             purposes.",
        ),
    ]
}
