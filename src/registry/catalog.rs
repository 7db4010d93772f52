// Catalog data

use super::Category::*;
use super::ProjectInfo;
use super::ProjectStatus::*;

const NO_KEYS: &[&str] = &[];

pub static PROJECTS: &[ProjectInfo] = &[
    ProjectInfo {
        id: "chat-website-rag",
        name: "Chat with Website - RAG Project",
        description: "RAG-based chatbot that can answer questions from any website using Pinecone vector store",
        category: Rag,
        path: "adse/Chat with website - RAG Project",
        technologies: &["LangChain", "OpenAI", "Pinecone", "Streamlit"],
        api_endpoint: None,
        features: &["Website scraping", "Vector embeddings", "Conversational AI", "History-aware retrieval"],
        status: Active,
        main_file: Some("app.py"),
        requires_api_key: &["OPENAI_API_KEY", "PINECONE_API_KEY", "PINECONE_ENV"],
    },
    ProjectInfo {
        id: "blog-generation-llama2",
        name: "Blog Generation using LLama2",
        description: "Generate blog posts using LLama2 model for different audiences",
        category: Llm,
        path: "adse/blog_generation_using_llama2-main",
        technologies: &["LLama2", "LangChain", "CTransformers", "Streamlit"],
        api_endpoint: None,
        features: &["Blog generation", "Multiple writing styles", "Word count control"],
        status: Active,
        main_file: Some("app.py"),
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "multilanguage-invoice-extractor",
        name: "Multilanguage Invoice Extractor",
        description: "Extract information from invoices using Google Gemini Vision",
        category: Vision,
        path: "adse/multilanguage_invoice_extractor-main",
        technologies: &["Google Gemini", "PIL", "Streamlit"],
        api_endpoint: None,
        features: &["Invoice parsing", "Multi-language support", "Image analysis"],
        status: Active,
        main_file: Some("app.py"),
        requires_api_key: &["GOOGLE_API_KEY"],
    },
    ProjectInfo {
        id: "educational-ai-survey",
        name: "Survey of Tools for Educational AI",
        description: "Comprehensive survey and data on educational AI tools",
        category: Educational,
        path: "adse/A_Survey_of_Tools_for_Educational_AI",
        technologies: &["Markdown", "Data Analysis"],
        api_endpoint: None,
        features: &["Educational software data", "AI4ED volunteer projects"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "better-writing-chatbots",
        name: "Better Writing Chatbots",
        description: "AI-powered writing assistance chatbots",
        category: Chatbot,
        path: "adse/Better_Writing_Chatbots",
        technologies: &["NLP", "Chatbot Framework"],
        api_endpoint: None,
        features: &["Writing improvement", "Grammar checking", "Style suggestions"],
        status: Development,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "case-interview-ai",
        name: "Case Interview AI",
        description: "AI assistant for case study interviews and practice",
        category: Educational,
        path: "adse/Case_Interview_AI",
        technologies: &["AI", "NLP"],
        api_endpoint: None,
        features: &["Case studies", "Interview preparation", "Practice scenarios"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "cognitive-type-typography",
        name: "Cognitive Type Typography AI",
        description: "AI for typography classification and generation",
        category: Tool,
        path: "adse/Cognitive_Type_Typography_AI",
        technologies: &["Computer Vision", "ML", "Typography"],
        api_endpoint: None,
        features: &["Typeface classification", "Generative type", "Cognitive search"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "computational-finance-ai",
        name: "Computational Finance AI",
        description: "AI tools for financial analysis and modeling",
        category: Tool,
        path: "adse/Computational_Finance_AI",
        technologies: &["Python", "Finance", "ML", "Monte Carlo"],
        api_endpoint: None,
        features: &["Financial modeling", "Monte Carlo simulations", "Ticker analysis"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "data-chatbots-education",
        name: "Data Chatbots in AI-Enhanced Education",
        description: "Educational chatbots dataset and analysis",
        category: Educational,
        path: "adse/Data_Chatbots_in_AI-Enhanced_Education",
        technologies: &["Data Analysis", "CSV"],
        api_endpoint: None,
        features: &["Educational chatbot data", "Analysis tools"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "dissertation-feedback-ai",
        name: "Generative AI for Dissertation Feedback",
        description: "AI-powered dissertation review and feedback system",
        category: Educational,
        path: "adse/Dis_Generative_AI_Software_for_Dissertation_Feedback",
        technologies: &["NLP", "Generative AI"],
        api_endpoint: None,
        features: &["Dissertation review", "Feedback generation", "Academic writing"],
        status: Development,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "rag-tools-tutorials",
        name: "RAG Tools and Tutorials for Educational AI",
        description: "Collection of RAG tools and educational materials",
        category: Rag,
        path: "adse/RAG_Tools_and_Tutorials_for_Educational_AI",
        technologies: &["RAG", "LangChain", "Vector Stores"],
        api_endpoint: None,
        features: &["RAG tutorials", "Educational resources"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "smartybots",
        name: "SmartyBots",
        description: "Smart educational bots framework",
        category: Chatbot,
        path: "adse/SmartyBots",
        technologies: &["Chatbot", "AI", "Education"],
        api_endpoint: None,
        features: &["Smart tutoring", "Conversational AI"],
        status: Development,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "otto-von-smartypants",
        name: "Otto von SmartyPants",
        description: "Intelligent AI assistant for education",
        category: Agent,
        path: "adse/Otto_von_SmartyPants",
        technologies: &["AI Agent", "Education"],
        api_endpoint: None,
        features: &["Intelligent tutoring", "Personalized learning"],
        status: Development,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
    ProjectInfo {
        id: "ai-tutor-eduementor",
        name: "EduMentor AI Tutor",
        description: "AI-enhanced tutoring system using RAG with file upload capabilities",
        category: Rag,
        path: "AI_Tutor-main",
        technologies: &["OpenAI", "Assistants API", "Streamlit", "RAG"],
        api_endpoint: Some("/api/ai-tutor"),
        features: &["PDF upload", "RAG-based Q&A", "Chat history", "File management"],
        status: Active,
        main_file: Some("app.py"),
        requires_api_key: &["OPENAI_API_KEY"],
    },
    ProjectInfo {
        id: "multi-pdf-chat",
        name: "Multi-PDF Chat Agent",
        description: "Chat with multiple PDF files using FAISS and Google Gemini",
        category: Rag,
        path: "Multi-PDFs_(2)",
        technologies: &["Google Gemini", "FAISS", "LangChain", "Streamlit"],
        api_endpoint: Some("/api/multi-pdf"),
        features: &["Multiple PDF upload", "Vector search", "Q&A chain"],
        status: Active,
        main_file: Some("chatapp.py"),
        requires_api_key: &["GOOGLE_API_KEY"],
    },
    ProjectInfo {
        id: "autogpt-platform",
        name: "AutoGPT Platform",
        description: "Autonomous AI agent platform for complex tasks",
        category: Agent,
        path: "AutoGPt(3)",
        technologies: &["Python", "FastAPI", "React", "Docker", "PostgreSQL"],
        api_endpoint: Some("/api/autogpt"),
        features: &["Autonomous agents", "Task automation", "Multi-agent orchestration"],
        status: Active,
        main_file: None,
        requires_api_key: &["OPENAI_API_KEY"],
    },
    ProjectInfo {
        id: "chatgpt-resources",
        name: "Awesome ChatGPT Repositories",
        description: "Curated list of ChatGPT-related repositories and tools",
        category: Tool,
        path: "ChatGpt(5)",
        technologies: &["Documentation", "Resources"],
        api_endpoint: None,
        features: &["Repository list", "Multi-language docs"],
        status: Active,
        main_file: None,
        requires_api_key: NO_KEYS,
    },
];
