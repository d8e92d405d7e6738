//! Static kit boilerplate, rendered with Tera.
//!
//! Available variables: `kit_name`, `slug`, `variant`.

/// `(path relative to the kit dir, template)` for every generated file.
pub const KIT_FILES: &[(&str, &str)] = &[
    ("server/package.json", SERVER_PACKAGE_JSON),
    ("server/server.js", SERVER_JS),
    ("client/package.json", CLIENT_PACKAGE_JSON),
    ("client/vite.config.js", VITE_CONFIG),
    ("client/tailwind.config.js", TAILWIND_CONFIG),
    ("client/postcss.config.js", POSTCSS_CONFIG),
    ("client/index.html", CLIENT_INDEX_HTML),
    ("client/src/main.jsx", MAIN_JSX),
    ("client/src/App.jsx", APP_JSX),
    ("client/src/index.css", INDEX_CSS),
    ("client/src/api.js", API_JS),
    ("client/src/pages/Home.jsx", HOME_JSX),
];

pub const SERVER_PACKAGE_JSON: &str = r#"{
  "name": {{ server_package | json_encode() }},
  "version": "1.0.0",
  "type": "module",
  "scripts": {
    "dev": "node server.js"
  },
  "dependencies": {
    "express": "^4.21.2",
    "cors": "^2.8.5"
  }
}"#;

pub const SERVER_JS: &str = r#"import express from 'express';
import cors from 'cors';

const app = express();
const PORT = process.env.PORT || 5050;

app.use(cors());
app.use(express.json());

app.get('/api/health', (req, res) => {
  res.json({
    ok: true,
    service: '{{ kit_name }}',
    timestamp: new Date().toISOString()
  });
});

app.get('/', (req, res) => {
  res.json({ message: '{{ kit_name }} API server' });
});

app.get('/favicon.ico', (req, res) => {
  res.status(204).end();
});

app.listen(PORT, () => {
  console.log(`✓ Server running on http://localhost:${PORT}`);
});
"#;

pub const CLIENT_PACKAGE_JSON: &str = r#"{
  "name": {{ client_package | json_encode() }},
  "private": true,
  "version": "1.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1",
    "axios": "^1.7.9"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.3.4",
    "vite": "^6.0.3",
    "tailwindcss": "^3.4.17",
    "postcss": "^8.4.49",
    "autoprefixer": "^10.4.20"
  }
}"#;

pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  server: {
    port: 5174,
    proxy: {
      '/api': {
        target: 'http://localhost:5050',
        changeOrigin: true
      }
    }
  }
});
"#;

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

pub const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub const CLIENT_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ kit_name }}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

pub const MAIN_JSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#;

pub const APP_JSX: &str = r#"import Home from './pages/Home';

function App() {
  return <Home />;
}

export default App;
"#;

pub const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

body {
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
}
"#;

pub const API_JS: &str = r#"import axios from 'axios';

export const apiClient = axios.create({
  baseURL: '/api'
});
"#;

// The inline style object uses `{{ }}`, hence the raw block.
pub const HOME_JSX: &str = r#"import { useEffect, useState } from 'react';
import { apiClient } from '../api';

function Home() {
  const [health, setHealth] = useState(null);

  useEffect(() => {
    apiClient.get('/health')
      .then(res => setHealth(res.data))
      .catch(err => console.error('Health check failed:', err));
  }, []);

  return (
    <div className="min-h-screen bg-gray-50">
      <header className="bg-white shadow-sm p-4">
        <h1 className="text-2xl font-bold text-gray-800">{{ kit_name }}</h1>
        {health && (
          <p className="text-sm text-green-600 mt-1">
            ✓ API Connected: {health.service} at {new Date(health.timestamp).toLocaleTimeString()}
          </p>
        )}
      </header>
      <main className="p-4">
        <iframe
          src="/{{ slug }}/{{ variant }}/index.html"
          className="w-full border-0"
          {% raw %}style={{ height: 'calc(100vh - 120px)' }}{% endraw %}
          title="Template Preview"
        />
      </main>
    </div>
  );
}

export default Home;
"#;
