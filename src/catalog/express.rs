//! Express.js setup reference: project setup, MongoDB, server, styling and deployment.

use crate::models::{Filter, ReferencePage, Section, SectionAccent, Snippet, SnippetLanguage};

pub const PAGE: ReferencePage = ReferencePage {
    id: "express",
    title: "Express.js Setup & API Development",
    tagline: "Express server setup, middleware, routing, Mongoose models and Vercel deployment",
    snippets: SNIPPETS,
    filters: FILTERS,
    sections: SECTIONS,
    initially_expanded: &["setup"],
};

const FILTERS: &[Filter] = &[
    Filter::all("All Snippets"),
    Filter::topics("setup", "Setup Commands", &["setup", "npm", "configuration"]),
    Filter::topics("database", "Database", &["mongodb", "mongoose", "database"]),
    Filter::topics("routes", "Routes & API", &["routes", "rest", "api"]),
    Filter::topics("frontend", "Frontend", &["tailwind", "css", "ejs", "templates"]),
    Filter::topics("deployment", "Deployment", &["deployment", "vercel", "production"]),
];

const SECTIONS: &[Section] = &[
    Section::new("setup", "Basic Setup", SectionAccent::Terminal),
    Section::new("mongodb", "MongoDB with Mongoose", SectionAccent::Database),
    Section::new("server", "Server Configuration", SectionAccent::Server),
    Section::new("routes", "Routes & API", SectionAccent::Routes),
    Section::new("tailwind", "Styling & Templates", SectionAccent::Styling),
    Section::new("deployment", "Deployment", SectionAccent::Deployment),
];

const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "basic-setup",
        title: "Express.js Basic Setup",
        description: "Initialize a new Express.js application with npm",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Bash,
        body: r#"npm init -y
npm i express"#,
        tags: &["setup", "npm", "express"],
        quick_setup: true,
        file_path: Some("Terminal"),
        sections: &[],
    },
    Snippet {
        id: "gitignore",
        title: ".gitignore Configuration",
        description: "Essential .gitignore file for Node.js/Express projects",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Bash,
        body: r#"# Dependencies
node_modules/

# Environment variables
.env
.env.local

# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory
coverage/

# Build output
dist/
build/

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db"#,
        tags: &["git", "configuration", "ignore"],
        quick_setup: true,
        file_path: Some(".gitignore"),
        sections: &[],
    },
    Snippet {
        id: "server-basic",
        title: "Basic Express Server",
        description: "Minimal Express server setup with port configuration",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"const express = require('express'); // "require" the Express module
const app = express(); // obtain the "app" object
const HTTP_PORT = process.env.PORT || 8080; // assign a port

// start the server on the port and output a confirmation to the console
app.listen(HTTP_PORT, () => console.log(`server listening on: ${HTTP_PORT}`));"#,
        tags: &["server", "basic", "setup"],
        quick_setup: false,
        file_path: Some("server.js"),
        sections: &["server"],
    },
    Snippet {
        id: "middleware-static",
        title: "Middleware & Static Files",
        description: "Configure middleware and serve static files",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"const path = require('path');
const express = require('express');
const app = express();

// Middleware
app.use(express.json()); // Parse JSON bodies
app.use(express.urlencoded({ extended: true })); // Parse URL-encoded bodies

// Serve static files from 'public' directory
app.use(express.static(path.join(__dirname, 'public')));

// Serve static files from 'views' directory
app.use(express.static(path.join(__dirname, 'views')));

// Example route serving HTML file
app.get('/', (req, res) => {
  res.sendFile(path.join(__dirname, 'views', 'home.html'));
});

// Export the app (important for Vercel deployment)
module.exports = app;"#,
        tags: &["middleware", "static", "configuration"],
        quick_setup: false,
        file_path: Some("server.js"),
        sections: &["server"],
    },
    Snippet {
        id: "folder-structure",
        title: "Recommended Folder Structure",
        description: "Professional folder structure for Express.js applications",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Text,
        body: r#"/server
  ├── config/
  │   └── db.js                 # Database connection setup
  ├── models/
  │   └── Site.js               # Mongoose schema and model
  ├── controllers/
  │   └── siteController.js     # Business logic abstraction
  ├── routes/
  │   └── siteRoutes.js         # Express routes
  ├── middleware/
  │   └── auth.js               # Custom middleware
  ├── public/
  │   ├── css/
  │   │   └── main.css          # Compiled CSS
  │   ├── js/
  │   │   └── app.js            # Frontend JavaScript
  │   └── images/               # Static images
  ├── views/
  │   ├── home.html             # HTML templates
  │   └── partials/             # Template partials
  ├── .env                      # Environment variables
  ├── .gitignore               # Git ignore file
  ├── package.json             # Dependencies and scripts
  └── server.js                # Express entry point"#,
        tags: &["structure", "organization", "best-practices"],
        quick_setup: false,
        file_path: Some("Project Structure"),
        sections: &["setup"],
    },
    Snippet {
        id: "mongodb-connection",
        title: "MongoDB Connection Setup",
        description: "Mongoose connection configuration with error handling",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// server/config/db.js
const mongoose = require('mongoose');

const connectDB = async (connectionString) => {
  try {
    const conn = await mongoose.connect(connectionString, {
      useNewUrlParser: true,
      useUnifiedTopology: true,
    });
    console.log(`✅ MongoDB Connected: ${conn.connection.host}`);
    return conn;
  } catch (err) {
    console.error('❌ MongoDB connection error:', err.message);
    // Exit process with failure
    process.exit(1);
  }
};

// Graceful shutdown
process.on('SIGINT', async () => {
  try {
    await mongoose.connection.close();
    console.log('MongoDB connection closed through app termination');
    process.exit(0);
  } catch (err) {
    console.error('Error closing MongoDB connection:', err);
    process.exit(1);
  }
});

module.exports = connectDB;"#,
        tags: &["mongodb", "mongoose", "database", "connection"],
        quick_setup: false,
        file_path: Some("server/config/db.js"),
        sections: &["mongodb"],
    },
    Snippet {
        id: "mongoose-schema",
        title: "Mongoose Schema & Model",
        description: "Complete Mongoose schema with nested schemas and validation",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// server/models/Site.js
const mongoose = require('mongoose');

const dateSchema = new mongoose.Schema({
  year: {
    type: String,
    required: [true, 'Year is required'],
    match: [/^\d{4}$/, 'Please enter a valid 4-digit year']
  },
  type: {
    type: String,
    enum: ['designated', 'proposed', 'rejected'],
    default: 'designated'
  }
}, { _id: false });

const locationSchema = new mongoose.Schema({
  town: {
    type: String,
    required: [true, 'Town name is required'],
    trim: true
  },
  latitude: {
    type: Number,
    min: -90,
    max: 90,
    required: true
  },
  longitude: {
    type: Number,
    min: -180,
    max: 180,
    required: true
  }
}, { _id: false });

const provinceOrTerritorySchema = new mongoose.Schema({
  code: {
    type: String,
    required: true,
    uppercase: true,
    minlength: 2,
    maxlength: 2
  },
  name: {
    type: String,
    required: true,
    trim: true
  },
  type: {
    type: String,
    enum: ['province', 'territory'],
    required: true
  },
  region: {
    type: String,
    enum: ['Western', 'Central', 'Atlantic', 'Northern'],
    required: true
  },
  capital: String
}, { _id: false });

const siteSchema = new mongoose.Schema({
  siteName: {
    type: String,
    required: [true, 'Site name is required'],
    unique: true,
    trim: true,
    minlength: [3, 'Site name must be at least 3 characters'],
    maxlength: [100, 'Site name cannot exceed 100 characters']
  },
  description: {
    type: String,
    required: true,
    minlength: [10, 'Description must be at least 10 characters']
  },
  dates: [dateSchema],
  designated: {
    type: Number,
    required: true,
    min: 1800,
    max: new Date().getFullYear()
  },
  image: {
    type: String,
    match: [/^https?:\/\//, 'Please enter a valid URL']
  },
  location: locationSchema,
  provinceOrTerritory: provinceOrTerritorySchema,
  createdAt: {
    type: Date,
    default: Date.now
  },
  updatedAt: {
    type: Date,
    default: Date.now
  }
});

// Update the updatedAt timestamp on save
siteSchema.pre('save', function(next) {
  this.updatedAt = Date.now();
  next();
});

// Create text index for search functionality
siteSchema.index({ siteName: 'text', description: 'text' });

module.exports = mongoose.model('Site', siteSchema);"#,
        tags: &["mongodb", "mongoose", "schema", "model", "validation"],
        quick_setup: false,
        file_path: Some("server/models/Site.js"),
        sections: &["mongodb"],
    },
    Snippet {
        id: "express-routes",
        title: "Express Routes with Controllers",
        description: "Complete REST API routes with controller abstraction",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// server/routes/siteRoutes.js
const express = require('express');
const router = express.Router();
const siteController = require('../controllers/siteController');

// GET all sites with pagination and filtering
router.get('/sites', async (req, res) => {
  try {
    const { page = 1, limit = 10, search, region, sortBy = 'siteName', order = 'asc' } = req.query;
    
    const result = await siteController.getAllSites({
      page: parseInt(page),
      limit: parseInt(limit),
      search,
      region,
      sortBy,
      order
    });
    
    res.status(200).json({
      success: true,
      count: result.sites.length,
      total: result.total,
      totalPages: result.totalPages,
      currentPage: result.currentPage,
      data: result.sites
    });
  } catch (err) {
    res.status(500).json({ 
      success: false, 
      error: err.message 
    });
  }
});

// GET single site by ID
router.get('/sites/:id', async (req, res) => {
  try {
    const site = await siteController.getSiteById(req.params.id);
    
    if (!site) {
      return res.status(404).json({ 
        success: false, 
        error: 'Site not found' 
      });
    }
    
    res.status(200).json({
      success: true,
      data: site
    });
  } catch (err) {
    res.status(500).json({ 
      success: false, 
      error: 'Failed to fetch site' 
    });
  }
});

// POST create new site
router.post('/sites', async (req, res) => {
  try {
    const site = await siteController.createSite(req.body);
    
    res.status(201).json({
      success: true,
      data: site,
      message: 'Site created successfully'
    });
  } catch (err) {
    if (err.name === 'ValidationError') {
      return res.status(400).json({ 
        success: false, 
        error: err.message 
      });
    }
    
    res.status(500).json({ 
      success: false, 
      error: 'Failed to create site' 
    });
  }
});

// PUT update site
router.put('/sites/:id', async (req, res) => {
  try {
    const site = await siteController.updateSite(req.params.id, req.body);
    
    if (!site) {
      return res.status(404).json({ 
        success: false, 
        error: 'Site not found' 
      });
    }
    
    res.status(200).json({
      success: true,
      data: site,
      message: 'Site updated successfully'
    });
  } catch (err) {
    res.status(500).json({ 
      success: false, 
      error: 'Failed to update site' 
    });
  }
});

// DELETE site
router.delete('/sites/:id', async (req, res) => {
  try {
    const site = await siteController.deleteSite(req.params.id);
    
    if (!site) {
      return res.status(404).json({ 
        success: false, 
        error: 'Site not found' 
      });
    }
    
    res.status(200).json({
      success: true,
      message: 'Site deleted successfully'
    });
  } catch (err) {
    res.status(500).json({ 
      success: false, 
      error: 'Failed to delete site' 
    });
  }
});

module.exports = router;"#,
        tags: &["routes", "rest", "api", "express"],
        quick_setup: false,
        file_path: Some("server/routes/siteRoutes.js"),
        sections: &["routes", "server"],
    },
    Snippet {
        id: "tailwind-setup",
        title: "Tailwind CSS Configuration",
        description: "Setup Tailwind CSS with Express.js",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Bash,
        body: r#"# Install Tailwind CSS and dependencies
npm install -D tailwindcss
npx tailwindcss init

# Install additional plugins (optional)
npm install -D @tailwindcss/typography daisyui"#,
        tags: &["tailwind", "css", "styling"],
        quick_setup: true,
        file_path: Some("Terminal"),
        sections: &[],
    },
    Snippet {
        id: "tailwind-config",
        title: "Tailwind Configuration File",
        description: "Tailwind CSS configuration for Express.js projects",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// tailwind.config.js
module.exports = {
  content: [
    "./views/**/*.html",
    "./public/**/*.js",
    "./public/**/*.css"
  ],
  theme: {
    extend: {
      colors: {
        primary: {
          50: '#eff6ff',
          100: '#dbeafe',
          200: '#bfdbfe',
          300: '#93c5fd',
          400: '#60a5fa',
          500: '#3b82f6',
          600: '#2563eb',
          700: '#1d4ed8',
          800: '#1e40af',
          900: '#1e3a8a',
        }
      },
      fontFamily: {
        sans: ['Inter', 'system-ui', 'sans-serif'],
      }
    },
  },
  plugins: [
    require('@tailwindcss/typography'),
    require('daisyui')
  ],
  
  // DaisyUI themes
  daisyui: {
    themes: ['light', 'dark', 'cupcake'],
    darkTheme: "dark",
  },
}

// package.json scripts
"scripts": {
  "tw:build": "tailwindcss build -i ./public/css/tailwind.css -o ./public/css/main.css",
  "tw:watch": "tailwindcss build -i ./public/css/tailwind.css -o ./public/css/main.css --watch",
  "tw:prod": "NODE_ENV=production tailwindcss build -i ./public/css/tailwind.css -o ./public/css/main.css --minify"
}"#,
        tags: &["tailwind", "configuration", "daisyui"],
        quick_setup: false,
        file_path: Some("tailwind.config.js"),
        sections: &["tailwind"],
    },
    Snippet {
        id: "ejs-setup",
        title: "EJS Template Engine Setup",
        description: "Configure EJS as the template engine for Express.js",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Bash,
        body: r#"# Install EJS
npm install ejs"#,
        tags: &["ejs", "templates", "views"],
        quick_setup: true,
        file_path: Some("Terminal"),
        sections: &[],
    },
    Snippet {
        id: "vercel-deployment",
        title: "Vercel Deployment Configuration",
        description: "Deploy Express.js applications to Vercel",
        language: SnippetLanguage::Json,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// vercel.json
{
  "version": 2,
  "builds": [
    {
      "src": "server.js",
      "use": "@vercel/node",
      "config": { 
        "includeFiles": ["public/**", "views/**", "dist/**"] 
      }
    }
  ],
  "routes": [
    {
      "src": "/(.*)",
      "dest": "server.js",
      "methods": ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"],
      "headers": {
        "Access-Control-Allow-Credentials": "true",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "GET,OPTIONS,PATCH,DELETE,POST,PUT",
        "Access-Control-Allow-Headers": "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version"
      }
    }
  ],
  "env": {
    "NODE_ENV": "production"
  }
}

// Common Vercel deployment errors and solutions:
// 1. 404 Error:
//    - Ensure vercel.json exists in root
//    - Make sure server.js exports the app: module.exports = app;
//    - Check if routes are properly configured

// 2. 500 Error:
//    - Add environment variables in Vercel dashboard
//    - Ensure all dependencies are in package.json
//    - Check for missing modules:
//      const dotenv = require("dotenv");
//      dotenv.config();"#,
        tags: &["deployment", "vercel", "production"],
        quick_setup: false,
        file_path: Some("vercel.json"),
        sections: &["deployment"],
    },
];
