// Inline project-details table backing the portfolio modal, plus the HTML
// rendering for the modal body. Ids match the `data-project` attributes on
// the host page's buttons.

pub struct ProjectDetails {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[ProjectDetails] = &[
    ProjectDetails {
        id: 1,
        title: "Student Management System",
        description: "A comprehensive desktop application built with C++ for managing student \
                      records, grades, and academic performance.",
        details: &[
            "Full CRUD operations for student records",
            "Grade management and GPA calculation",
            "File-based data persistence",
            "Intuitive console-based UI",
            "Search and filter functionality",
            "Report generation",
        ],
        technologies: &["C++", "Data Structures", "File I/O", "OOP"],
        link: "#",
    },
    ProjectDetails {
        id: 2,
        title: "AI-Powered OS Monitoring System",
        description: "Intelligent system monitoring platform using Flask and machine learning to \
                      predict system failures and optimize resource usage.",
        details: &[
            "Real-time system metrics collection",
            "ML-based failure prediction",
            "Beautiful web dashboard with Charts.js",
            "Email alert notifications",
            "Historical data analysis",
            "RESTful API for integrations",
            "Docker containerization",
            "PostgreSQL database",
        ],
        technologies: &[
            "Python",
            "Flask",
            "Machine Learning",
            "Docker",
            "JavaScript",
            "PostgreSQL",
        ],
        link: "#",
    },
    ProjectDetails {
        id: 3,
        title: "Scalable E-Commerce Architecture",
        description: "Production-grade e-commerce infrastructure on AWS featuring auto-scaling, \
                      CDN optimization, and serverless functions.",
        details: &[
            "Multi-region AWS deployment",
            "Auto-scaling EC2 instances",
            "CloudFront CDN for static assets",
            "Lambda functions for serverless computing",
            "RDS MySQL database with read replicas",
            "ElastiCache for session management",
            "S3 for product images",
            "CI/CD pipeline with CodePipeline",
            "Security: WAF, SSL/TLS, VPC isolation",
            "Handles 100K+ concurrent users",
        ],
        technologies: &["AWS", "Docker", "Python", "Node.js", "MySQL", "DevOps"],
        link: "#",
    },
];

/// Look up a project by the id carried in a button's `data-project` attribute.
pub fn find_project(id: u32) -> Option<&'static ProjectDetails> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Build the modal body markup for one project. Styling stays inline so the
/// modal renders the same regardless of which page section loaded it.
pub fn render_project_html(project: &ProjectDetails) -> String {
    let details: String = project
        .details
        .iter()
        .map(|detail| {
            format!(
                "<li style=\"padding: 8px 0; padding-left: 20px; position: relative; \
                 color: var(--text-secondary);\">\
                 <span style=\"position: absolute; left: 0; color: var(--primary-color);\">→</span> \
                 {detail}</li>"
            )
        })
        .collect();
    let technologies: String = project
        .technologies
        .iter()
        .map(|tech| {
            format!(
                "<span style=\"background: rgba(102, 126, 234, 0.2); color: var(--primary-color); \
                 padding: 6px 14px; border-radius: 20px; font-size: 0.85rem; \
                 font-weight: 500;\">{tech}</span>"
            )
        })
        .collect();

    format!(
        "<h2>{title}</h2>\
         <p style=\"color: var(--text-secondary); margin: 15px 0; line-height: 1.6;\">{description}</p>\
         <h3 style=\"margin-top: 20px; margin-bottom: 10px; color: var(--primary-color);\">Key Features</h3>\
         <ul style=\"list-style: none; padding: 0; margin-bottom: 20px;\">{details}</ul>\
         <h3 style=\"margin-top: 20px; margin-bottom: 10px; color: var(--primary-color);\">Technologies</h3>\
         <div style=\"display: flex; flex-wrap: wrap; gap: 10px; margin-bottom: 20px;\">{technologies}</div>\
         <a href=\"{link}\" class=\"btn btn-primary\" style=\"display: inline-block; margin-top: 15px;\">View Project</a>",
        title = project.title,
        description = project.description,
        details = details,
        technologies = technologies,
        link = project.link,
    )
}
