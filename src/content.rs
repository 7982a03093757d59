//! The fixed page content.
//!
//! The portfolio is a static site: all copy, cards, and links are hard-coded
//! here and assembled once when the page mounts. Keeping the values out of
//! the components makes the sections pure renderers over [`Profile`].

use crate::models::{
    AboutContent, Certification, ContactChannel, HeroContent, Highlight, Profile, Project,
    Service, SkillGroup, SocialLink,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Builds the complete page content.
#[must_use]
pub fn profile() -> Profile {
    Profile {
        brand_accent: "Cloud".to_string(),
        brand_rest: "Architect".to_string(),
        hero: HeroContent {
            headline_accent: "Cloud".to_string(),
            headline_rest: " Solutions".to_string(),
            headline_sub: "Architect".to_string(),
            tagline: "Transforming businesses through scalable cloud architecture, \
                      DevOps excellence, and innovative infrastructure solutions."
                .to_string(),
        },
        about: AboutContent {
            paragraphs: owned(&[
                "As a seasoned Cloud Solutions Architect with over 8 years of experience, \
                 I specialize in designing and implementing scalable, secure, and \
                 cost-effective cloud infrastructure across AWS, Azure, and Google Cloud \
                 Platform.",
                "My expertise spans cloud migration strategies, DevOps implementation, \
                 security best practices, and enterprise-grade architecture design. I've \
                 successfully led digital transformation initiatives for Fortune 500 \
                 companies and innovative startups alike.",
            ]),
            highlights: vec![
                Highlight {
                    icon: "award".to_string(),
                    text: "8+ Years Experience".to_string(),
                },
                Highlight {
                    icon: "users".to_string(),
                    text: "50+ Projects Delivered".to_string(),
                },
                Highlight {
                    icon: "cloud".to_string(),
                    text: "Multi-Cloud Expert".to_string(),
                },
            ],
            image_url: "https://images.unsplash.com/photo-1596784326488-23581279e33d".to_string(),
        },
        skill_groups: vec![
            SkillGroup {
                icon: "cloud".to_string(),
                title: "Cloud Platforms".to_string(),
                skills: owned(&["AWS", "Azure", "Google Cloud", "Multi-Cloud"]),
            },
            SkillGroup {
                icon: "code".to_string(),
                title: "Infrastructure as Code".to_string(),
                skills: owned(&["Terraform", "CloudFormation", "Pulumi", "ARM Templates"]),
            },
            SkillGroup {
                icon: "server".to_string(),
                title: "DevOps & CI/CD".to_string(),
                skills: owned(&["Jenkins", "GitLab CI", "GitHub Actions", "Azure DevOps"]),
            },
            SkillGroup {
                icon: "database".to_string(),
                title: "Databases".to_string(),
                skills: owned(&["PostgreSQL", "MongoDB", "Redis", "DynamoDB"]),
            },
            SkillGroup {
                icon: "shield".to_string(),
                title: "Security".to_string(),
                skills: owned(&["IAM", "Security Groups", "VPC", "Compliance"]),
            },
            SkillGroup {
                icon: "zap".to_string(),
                title: "Monitoring".to_string(),
                skills: owned(&["CloudWatch", "Grafana", "Prometheus", "ELK Stack"]),
            },
        ],
        services: vec![
            Service {
                icon: "cloud".to_string(),
                title: "Cloud Migration".to_string(),
                description: "Seamless migration of your applications and data to the cloud \
                              with minimal downtime and maximum efficiency."
                    .to_string(),
            },
            Service {
                icon: "server".to_string(),
                title: "Architecture Design".to_string(),
                description: "Scalable, secure, and cost-effective cloud architecture \
                              designed for your specific business requirements."
                    .to_string(),
            },
            Service {
                icon: "code".to_string(),
                title: "DevOps Implementation".to_string(),
                description: "Complete DevOps pipeline setup with automated testing, \
                              deployment, and monitoring solutions."
                    .to_string(),
            },
            Service {
                icon: "shield".to_string(),
                title: "Security & Compliance".to_string(),
                description: "Robust security frameworks and compliance strategies to \
                              protect your cloud infrastructure."
                    .to_string(),
            },
            Service {
                icon: "zap".to_string(),
                title: "Cost Optimization".to_string(),
                description: "Analyze and optimize your cloud spending while maintaining \
                              performance and reliability."
                    .to_string(),
            },
            Service {
                icon: "users".to_string(),
                title: "Consulting & Training".to_string(),
                description: "Expert guidance and team training to accelerate your cloud \
                              adoption journey."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                title: "Enterprise Cloud Migration".to_string(),
                company: "Fortune 500 Financial Services".to_string(),
                duration: "2023 - 2024".to_string(),
                description: "Led the migration of legacy systems to AWS, reducing \
                              infrastructure costs by 40% while improving performance and \
                              security."
                    .to_string(),
                technologies: owned(&["AWS", "Terraform", "Docker", "Kubernetes"]),
            },
            Project {
                title: "Multi-Cloud DevOps Platform".to_string(),
                company: "Tech Startup".to_string(),
                duration: "2022 - 2023".to_string(),
                description: "Designed and implemented a multi-cloud CI/CD pipeline \
                              supporting rapid deployment across AWS, Azure, and GCP."
                    .to_string(),
                technologies: owned(&["Jenkins", "GitLab CI", "Azure DevOps", "Prometheus"]),
            },
            Project {
                title: "Serverless Architecture Redesign".to_string(),
                company: "E-commerce Platform".to_string(),
                duration: "2021 - 2022".to_string(),
                description: "Transformed monolithic architecture to serverless \
                              microservices, achieving 60% cost reduction and improved \
                              scalability."
                    .to_string(),
                technologies: owned(&["AWS Lambda", "API Gateway", "DynamoDB", "CloudFront"]),
            },
            Project {
                title: "Hybrid Cloud Implementation".to_string(),
                company: "Healthcare Provider".to_string(),
                duration: "2020 - 2021".to_string(),
                description: "Implemented secure hybrid cloud solution ensuring HIPAA \
                              compliance while enabling digital transformation."
                    .to_string(),
                technologies: owned(&["Azure", "VPN Gateway", "Azure AD", "Compliance Center"]),
            },
        ],
        certifications: vec![
            Certification {
                title: "AWS Solutions Architect".to_string(),
                level: "Professional".to_string(),
                provider: "Amazon Web Services".to_string(),
                year: "2023".to_string(),
                accent_class: "badge-orange".to_string(),
            },
            Certification {
                title: "Azure Solutions Architect".to_string(),
                level: "Expert".to_string(),
                provider: "Microsoft Azure".to_string(),
                year: "2023".to_string(),
                accent_class: "badge-blue".to_string(),
            },
            Certification {
                title: "Google Cloud Architect".to_string(),
                level: "Professional".to_string(),
                provider: "Google Cloud".to_string(),
                year: "2022".to_string(),
                accent_class: "badge-green".to_string(),
            },
            Certification {
                title: "Kubernetes Administrator".to_string(),
                level: "Certified".to_string(),
                provider: "CNCF".to_string(),
                year: "2022".to_string(),
                accent_class: "badge-purple".to_string(),
            },
            Certification {
                title: "Terraform Associate".to_string(),
                level: "Certified".to_string(),
                provider: "HashiCorp".to_string(),
                year: "2021".to_string(),
                accent_class: "badge-indigo".to_string(),
            },
            Certification {
                title: "DevOps Engineer".to_string(),
                level: "Professional".to_string(),
                provider: "AWS".to_string(),
                year: "2021".to_string(),
                accent_class: "badge-red".to_string(),
            },
        ],
        contact_channels: vec![
            ContactChannel {
                icon: "mail".to_string(),
                label: "Email".to_string(),
                value: "architect@cloudexpert.com".to_string(),
            },
            ContactChannel {
                icon: "phone".to_string(),
                label: "Phone".to_string(),
                value: "+1 (555) 123-4567".to_string(),
            },
            ContactChannel {
                icon: "map-pin".to_string(),
                label: "Location".to_string(),
                value: "San Francisco, CA".to_string(),
            },
        ],
        social_links: vec![
            SocialLink {
                icon: "linkedin".to_string(),
                label: "LinkedIn profile".to_string(),
                href: "https://linkedin.com/in/cloudarchitect".to_string(),
            },
            SocialLink {
                icon: "github".to_string(),
                label: "GitHub profile".to_string(),
                href: "https://github.com/cloudarchitect".to_string(),
            },
            SocialLink {
                icon: "external-link".to_string(),
                label: "Resume".to_string(),
                href: "https://cloudexpert.com/resume".to_string(),
            },
        ],
        footer_line: "© 2024 CloudArchitect. All rights reserved.".to_string(),
    }
}
