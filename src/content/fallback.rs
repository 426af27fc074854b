//! Built-in posts shown when no markdown content is available

use super::Post;

struct Entry {
    slug: &'static str,
    title: &'static str,
    date: &'static str,
    read_time: &'static str,
    excerpt: &'static str,
    tags: &'static [&'static str],
    category: &'static str,
}

/// Newest first, like loaded posts
const ENTRIES: [Entry; 4] = [
    Entry {
        slug: "building-scalable-microservices-with-go",
        title: "Building Scalable Microservices with Go",
        date: "2024-01-15",
        read_time: "8 min",
        excerpt: "A deep dive into designing and implementing microservices architecture using Go, covering service discovery, load balancing, and fault tolerance patterns.",
        tags: &["Go", "Microservices", "Architecture"],
        category: "technical",
    },
    Entry {
        slug: "understanding-distributed-consensus-algorithms",
        title: "Understanding Distributed Consensus Algorithms",
        date: "2024-01-08",
        read_time: "12 min",
        excerpt: "An exploration of Paxos, Raft, and other consensus algorithms, with practical examples and implementation considerations for distributed systems.",
        tags: &["Distributed Systems", "Algorithms", "Theory"],
        category: "research",
    },
    Entry {
        slug: "machine-learning-model-deployment-best-practices",
        title: "Machine Learning Model Deployment Best Practices",
        date: "2023-12-20",
        read_time: "10 min",
        excerpt: "Lessons learned from deploying ML models to production, including versioning, monitoring, A/B testing, and handling model drift.",
        tags: &["Machine Learning", "MLOps", "DevOps"],
        category: "technical",
    },
    Entry {
        slug: "reflections-on-research-and-engineering",
        title: "Reflections on Research and Engineering",
        date: "2023-12-10",
        read_time: "6 min",
        excerpt: "Thoughts on bridging the gap between academic research and practical engineering, and how each discipline informs the other.",
        tags: &["Career", "Research", "Engineering"],
        category: "thoughts",
    },
];

/// The built-in post list, truncated to `limit` when given
pub fn fallback_posts(limit: Option<usize>) -> Vec<Post> {
    ENTRIES
        .iter()
        .take(limit.unwrap_or(ENTRIES.len()))
        .map(|e| Post {
            slug: e.slug.to_string(),
            title: e.title.to_string(),
            date: e.date.to_string(),
            read_time: e.read_time.to_string(),
            excerpt: e.excerpt.to_string(),
            tags: e.tags.iter().map(|t| t.to_string()).collect(),
            category: e.category.to_string(),
            content: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_posts_newest_first() {
        let posts = fallback_posts(None);
        assert_eq!(posts.len(), 4);
        for pair in posts.windows(2) {
            assert!(pair[0].published_at() >= pair[1].published_at());
        }
        assert!(posts.iter().all(|p| p.content.is_none()));
    }

    #[test]
    fn test_limit() {
        let posts = fallback_posts(Some(2));
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].slug, "understanding-distributed-consensus-algorithms");
        assert_eq!(fallback_posts(Some(10)).len(), 4);
        assert!(fallback_posts(Some(0)).is_empty());
    }
}
