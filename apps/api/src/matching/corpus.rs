//! The fixed job corpus every local query is evaluated against.

use chrono::NaiveDate;

use crate::models::job::JobListing;

/// Read-only, ordered set of job listings. Order is the tie-break for ranking.
#[derive(Debug, Clone)]
pub struct JobCorpus {
    jobs: Vec<JobListing>,
}

impl JobCorpus {
    pub fn new(jobs: Vec<JobListing>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

impl Default for JobCorpus {
    fn default() -> Self {
        Self::new(default_jobs())
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    skills: [&'static str; 5],
    salary: &'static str,
    posted: (i32, u32, u32),
    remote: bool,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        title: "Senior Frontend Developer",
        company: "TechCorp",
        location: "San Francisco, CA",
        description: "Join our team to build cutting-edge web applications using React and TypeScript.",
        skills: ["React", "TypeScript", "JavaScript", "HTML/CSS", "REST API"],
        salary: "$120,000 - $150,000",
        posted: (2023, 8, 15),
        remote: true,
    },
    Seed {
        id: "2",
        title: "Full Stack Developer",
        company: "InnovateSoft",
        location: "New York, NY",
        description: "Looking for a full stack developer with experience in React, Node.js, and MongoDB.",
        skills: ["React", "Node.js", "MongoDB", "JavaScript", "Express"],
        salary: "$100,000 - $130,000",
        posted: (2023, 8, 10),
        remote: false,
    },
    Seed {
        id: "3",
        title: "Backend Engineer",
        company: "DataDriven",
        location: "Austin, TX",
        description: "Develop and maintain our backend services using Node.js, Express, and MongoDB.",
        skills: ["Node.js", "Express", "MongoDB", "JavaScript", "REST API"],
        salary: "$90,000 - $120,000",
        posted: (2023, 8, 5),
        remote: true,
    },
    Seed {
        id: "4",
        title: "UI/UX Designer",
        company: "DesignMasters",
        location: "Los Angeles, CA",
        description: "Create beautiful and intuitive user interfaces for our web and mobile applications.",
        skills: ["UI/UX Design", "Figma", "Adobe XD", "HTML/CSS", "Prototyping"],
        salary: "$80,000 - $110,000",
        posted: (2023, 8, 1),
        remote: false,
    },
    Seed {
        id: "5",
        title: "DevOps Engineer",
        company: "CloudNative",
        location: "Seattle, WA",
        description: "Manage our cloud infrastructure and CI/CD pipelines using AWS, Docker, and Kubernetes.",
        skills: ["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"],
        salary: "$110,000 - $140,000",
        posted: (2023, 7, 28),
        remote: true,
    },
    Seed {
        id: "6",
        title: "Product Manager",
        company: "ProductLabs",
        location: "Boston, MA",
        description: "Lead the development of new products and features, working closely with engineering and design teams.",
        skills: ["Product Management", "Agile", "Scrum", "User Research", "Roadmapping"],
        salary: "$100,000 - $130,000",
        posted: (2023, 7, 25),
        remote: false,
    },
    Seed {
        id: "7",
        title: "Data Scientist",
        company: "DataAnalytics",
        location: "Chicago, IL",
        description: "Analyze large datasets to extract insights and build machine learning models using Python and related libraries.",
        skills: ["Python", "Machine Learning", "SQL", "Data Analysis", "Statistics"],
        salary: "$90,000 - $120,000",
        posted: (2023, 7, 20),
        remote: true,
    },
    Seed {
        id: "8",
        title: "Python Developer",
        company: "CodeWizards",
        location: "Denver, CO",
        description: "Build backend services and data processing pipelines using Python and related frameworks.",
        skills: ["Python", "Django", "Flask", "SQL", "API Development"],
        salary: "$95,000 - $125,000",
        posted: (2023, 7, 18),
        remote: true,
    },
];

/// Builds the built-in listings. Seed dates are fixed literals and always valid.
pub fn default_jobs() -> Vec<JobListing> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.posted;
            let posted_date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(JobListing {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                location: seed.location.to_string(),
                description: seed.description.to_string(),
                required_skills: seed.skills.iter().map(|s| s.to_string()).collect(),
                salary: Some(seed.salary.to_string()),
                posted_date,
                is_remote: seed.remote,
            })
        })
        .collect()
}
