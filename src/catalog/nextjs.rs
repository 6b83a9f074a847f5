//! Next.js setup reference: auth, styling, database, data fetching and dependencies.

use crate::models::{Filter, ReferencePage, Section, SectionAccent, Snippet, SnippetLanguage};

pub const PAGE: ReferencePage = ReferencePage {
    id: "nextjs",
    title: "Next.js Setup Reference",
    tagline: "Production-ready Next.js snippets: NextAuth, Tailwind, MongoDB, SWR",
    snippets: SNIPPETS,
    filters: FILTERS,
    sections: SECTIONS,
    initially_expanded: &["nextauth"],
};

const FILTERS: &[Filter] = &[
    Filter::all("All Snippets"),
    Filter::topics(
        "auth",
        "Authentication",
        &["authentication", "oauth", "security", "environment"],
    ),
    Filter::topics("styling", "Styling", &["styling", "css"]),
    Filter::topics("database", "Database", &["database", "mongodb", "orm", "crud"]),
    Filter::topics("data", "Data Fetching", &["data-fetching", "caching", "hooks"]),
];

const SECTIONS: &[Section] = &[
    Section::new("nextauth", "NextAuth.js Configuration", SectionAccent::Auth),
    Section::new("tailwind", "Tailwind CSS Setup", SectionAccent::Styling),
    Section::new("mongodb-mongoose", "MongoDB with Mongoose", SectionAccent::Database),
    Section::new("swr-app", "SWR Configuration", SectionAccent::Data),
    Section::new("dependencies", "Project Dependencies", SectionAccent::Package),
];

const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "nextjs-setup",
        title: "Next.js Setup",
        description: "Create a new Next.js application with TypeScript and Tailwind CSS",
        language: SnippetLanguage::Bash,
        highlight: SnippetLanguage::Bash,
        body: r#"npx create-next-app@latest my-app --use-npm"#,
        tags: &["setup", "cli"],
        quick_setup: true,
        file_path: Some("Terminal"),
        sections: &[],
    },
    Snippet {
        id: "nextauth-api-route",
        title: "NextAuth.js API Route",
        description: "Complete NextAuth.js configuration with multiple OAuth providers",
        language: SnippetLanguage::TypeScript,
        highlight: SnippetLanguage::TypeScript,
        body: r#"import NextAuth, { type NextAuthOptions } from 'next-auth';
import GoogleProvider from 'next-auth/providers/google';
import GitHubProvider from 'next-auth/providers/github';
import FacebookProvider from 'next-auth/providers/facebook';
import type { JWT } from 'next-auth/jwt';
import type { Session } from 'next-auth';

export const authOptions: NextAuthOptions = {
  providers: [
    GoogleProvider({
      clientId: process.env.GOOGLE_CLIENT_ID!,
      clientSecret: process.env.GOOGLE_CLIENT_SECRET!,
    }),
    GitHubProvider({
      clientId: process.env.GITHUB_ID!,
      clientSecret: process.env.GITHUB_SECRET!,
    }),
    FacebookProvider({
      clientId: process.env.FACEBOOK_CLIENT_ID!,
      clientSecret: process.env.FACEBOOK_CLIENT_SECRET!,
    }),
  ],

  callbacks: {
    async jwt({ token, user, account }): Promise<JWT> {
      if (user) {
        token.id = (user as any).id;
      }
      if (account?.access_token) {
        token.accessToken = account.access_token;
      }
      return token;
    },

    async session({ session, token }): Promise<Session> {
      if (session.user) {
        (session.user as any).id = token.id;
      }
      (session as any).accessToken = token.accessToken;
      return session;
    }
  },

  pages: {
    signIn: '/auth/signin',
    signUp: '/auth/signup',
  },

  secret: process.env.NEXTAUTH_SECRET!,
};

const handler = NextAuth(authOptions);
export { handler as GET, handler as POST };"#,
        tags: &["authentication", "oauth", "security"],
        quick_setup: false,
        file_path: Some("app/api/auth/[...nextauth]/route.ts"),
        sections: &["nextauth"],
    },
    Snippet {
        id: "nextauth-env",
        title: "NextAuth Environment Variables",
        description: "Required environment variables for NextAuth.js configuration",
        language: SnippetLanguage::Env,
        highlight: SnippetLanguage::Bash,
        body: r#"# NextAuth.js
NEXTAUTH_URL=http://localhost:3000
NEXTAUTH_SECRET=your-secret-key-here

# Google OAuth
GOOGLE_CLIENT_ID=your-google-client-id
GOOGLE_CLIENT_SECRET=your-google-client-secret

# GitHub OAuth
GITHUB_ID=your-github-id
GITHUB_SECRET=your-github-secret

# Facebook OAuth
FACEBOOK_CLIENT_ID=your-facebook-app-id
FACEBOOK_CLIENT_SECRET=your-facebook-app-secret"#,
        tags: &["environment", "configuration"],
        quick_setup: false,
        file_path: Some(".env.local"),
        sections: &["nextauth"],
    },
    Snippet {
        id: "tailwind-config",
        title: "Tailwind CSS Configuration",
        description: "Complete Tailwind CSS setup for Next.js",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// File - tailwind.config.js
/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./app/**/*.{js,ts,jsx,tsx}",
    "./pages/**/*.{js,ts,jsx,tsx}",
    "./components/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
}"#,
        tags: &["styling", "configuration"],
        quick_setup: false,
        file_path: Some("tailwind.config.js"),
        sections: &["tailwind"],
    },
    Snippet {
        id: "tailwind-global-css",
        title: "Global CSS with Tailwind",
        description: "Global CSS file with Tailwind directives",
        language: SnippetLanguage::Css,
        highlight: SnippetLanguage::Css,
        body: r#"/* app/globals.css */
@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {
  :root {
    --background: 0 0% 100%;
    --foreground: 222.2 84% 4.9%;
  }
}

@layer utilities {
  .scrollbar-thin {
    scrollbar-width: thin;
  }
  
  .scrollbar-thin::-webkit-scrollbar {
    width: 6px;
    height: 6px;
  }
  
  .scrollbar-thin::-webkit-scrollbar-track {
    background: #f1f1f1;
    border-radius: 3px;
  }
  
  .scrollbar-thin::-webkit-scrollbar-thumb {
    background: #888;
    border-radius: 3px;
  }
}"#,
        tags: &["styling", "css"],
        quick_setup: false,
        file_path: Some("app/globals.css"),
        sections: &["tailwind"],
    },
    Snippet {
        id: "mongodb-mongoose-setup",
        title: "MongoDB with Mongoose Setup",
        description: "Complete MongoDB connection setup using Mongoose",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// File: lib/dbUtils.js
import mongoose from 'mongoose';

const userSchema = new mongoose.Schema({
  name: {
    type: String,
    required: true,
    unique: true,
  },
  email: {
    type: String,
    required: true,
    unique: true,
  },
  createdAt: {
    type: Date,
    default: Date.now,
  },
});

mongoose.models = {}; // Avoid OverwriteModelError in dev
export const UserModel = mongoose.model('users', userSchema);

export async function mongooseConnect() {
  if (mongoose.connections[0].readyState) {
    return true; // Already connected
  }

  try {
    await mongoose.connect(process.env.MONGODB_URI!);
    return true;
  } catch (err) {
    throw new Error(err);
  }
}"#,
        tags: &["database", "mongodb", "orm"],
        quick_setup: false,
        file_path: Some("lib/dbUtils.js"),
        sections: &["mongodb-mongoose"],
    },
    Snippet {
        id: "mongodb-crud-api",
        title: "MongoDB CRUD API Routes",
        description: "Complete CRUD operations with MongoDB and Next.js API routes",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: r#"// File: app/api/users/route.js
import { mongooseConnect, UserModel } from '@/lib/dbUtils';

export async function GET() {
  try {
    await mongooseConnect();
    const users = await UserModel.find();
    return new Response(JSON.stringify(users), {
      status: 200,
      headers: { 'Content-Type': 'application/json' },
    });
  } catch (err) {
    return new Response(JSON.stringify({ error: err.message }), {
      status: 500,
    });
  }
}

export async function POST(request) {
  try {
    await mongooseConnect();
    const body = await request.json();
    const newUser = new UserModel(body);
    await newUser.save();
    
    return new Response(
      JSON.stringify({ message: 'User created successfully', user: newUser }),
      {
        status: 201,
        headers: { 'Content-Type': 'application/json' },
      }
    );
  } catch (err) {
    return new Response(JSON.stringify({ error: err.message }), {
      status: 500,
    });
  }
}"#,
        tags: &["database", "api", "crud"],
        quick_setup: false,
        file_path: Some("app/api/users/route.js"),
        sections: &["mongodb-mongoose"],
    },
    Snippet {
        id: "swr-config",
        title: "SWR Global Configuration",
        description: "Global SWR setup with fetcher and provider",
        language: SnippetLanguage::TypeScript,
        highlight: SnippetLanguage::TypeScript,
        body: r#"// lib/fetcher.ts
export const fetcher = async (url: string) => {
  const res = await fetch(url);

  if (!res.ok) {
    const error = new Error("An error occurred while fetching the data.");
    // @ts-ignore
    error.info = await res.json();
    // @ts-ignore
    error.status = res.status;
    throw error;
  }

  return res.json();
};

// components/SWRProvider.tsx
'use client';

import { SWRConfig } from 'swr';
import { fetcher } from '@/lib/fetcher';

export default function SWRProvider({ children }: { children: React.ReactNode }) {
  return (
    <SWRConfig value={{ fetcher }}>
      {children}
    </SWRConfig>
  );
}"#,
        tags: &["data-fetching", "caching", "hooks"],
        quick_setup: false,
        file_path: Some("lib/fetcher.ts"),
        sections: &["swr-app"],
    },
    Snippet {
        id: "swr-usage",
        title: "Using SWR in Components",
        description: "How to use SWR for data fetching in React components",
        language: SnippetLanguage::TypeScript,
        highlight: SnippetLanguage::TypeScript,
        body: r#"// components/UserList.tsx
'use client';

import useSWR from 'swr';

interface User {
  id: string;
  name: string;
  email: string;
}

export default function UserList() {
  const { data: users, error, isLoading } = useSWR<User[]>('/api/users');

  if (isLoading) {
    return (
      <div className="flex items-center justify-center p-8">
        <div className="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
      </div>
    );
  }

  if (error) {
    return (
      <div className="p-4 bg-red-50 border border-red-200 rounded-lg">
        <p className="text-red-700">Error loading users: {error.message}</p>
      </div>
    );
  }

  return (
    <div className="space-y-4">
      {users?.map((user) => (
        <div key={user.id} className="p-4 bg-white border rounded-lg shadow-sm">
          <h3 className="font-semibold text-gray-900">{user.name}</h3>
          <p className="text-gray-600">{user.email}</p>
        </div>
      ))}
    </div>
  );
}"#,
        tags: &["data-fetching", "react", "hooks"],
        quick_setup: false,
        file_path: Some("components/UserList.tsx"),
        sections: &["swr-app"],
    },
    Snippet {
        id: "package-json",
        title: "Package.json Dependencies",
        description: "Complete package.json with all required dependencies",
        language: SnippetLanguage::Json,
        highlight: SnippetLanguage::Json,
        body: r#"{
  "name": "nextjs-saas-starter",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {
    "@prisma/client": "^5.0.0",
    "next": "14.0.0",
    "next-auth": "^4.24.5",
    "mongoose": "^8.0.0",
    "mongodb": "^6.0.0",
    "swr": "^2.2.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "lucide-react": "^0.309.0",
    "tailwind-merge": "^2.0.0",
    "clsx": "^2.0.0"
  },
  "devDependencies": {
    "@types/node": "^20.0.0",
    "@types/react": "^18.2.0",
    "@types/react-dom": "^18.2.0",
    "@types/mongodb": "^4.0.0",
    "@types/mongoose": "^5.0.0",
    "autoprefixer": "^10.0.0",
    "eslint": "^8.0.0",
    "eslint-config-next": "14.0.0",
    "postcss": "^8.0.0",
    "prismjs": "^1.29.0",
    "tailwindcss": "^3.3.0",
    "typescript": "^5.0.0"
  }
}"#,
        tags: &["dependencies", "npm", "package"],
        quick_setup: false,
        file_path: Some("package.json"),
        sections: &["dependencies"],
    },
];
